//! Host-facing filter lifecycle.

use crate::config::settings::FilterSettings;
use crate::foundation::core::ColorSpace;
use crate::foundation::error::FxResult;
use crate::render::graphics::Graphics;
use crate::render::offscreen::RenderOutcome;
use crate::render::source::FilterContext;

/// The perspective transform filter.
pub mod perspective;
/// Explicit registry of filter types.
pub mod registry;

/// Callbacks a host drives on a filter instance.
///
/// Creation and defaults are per filter type and live on
/// [`registry::FilterDescriptor`].
pub trait VideoFilter<G: Graphics + ?Sized> {
    /// Apply changed settings. On error the previous parameters stay in effect.
    fn update(&mut self, settings: &FilterSettings) -> FxResult<()>;

    /// Called once per output tick. Render calls for the tick may come before or after it.
    fn video_tick(&mut self, seconds: f32);

    /// Render the filter's output into the currently bound target.
    fn video_render(&mut self, ctx: &mut dyn FilterContext<G>, gfx: &mut G) -> RenderOutcome;

    /// Report the space this filter renders in, given the host's candidates.
    fn video_color_space(&self, ctx: &dyn FilterContext<G>, preferred: &[ColorSpace])
    -> ColorSpace;

    /// Release graphics resources. The instance must not be rendered afterwards.
    fn destroy(&mut self, gfx: &mut G);
}
