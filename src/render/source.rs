use crate::foundation::core::{Canvas, ColorSpace, OutputFlags, SourceId};
use crate::render::graphics::Graphics;

/// Upstream video source as seen by a filter.
pub trait VideoSource<G: Graphics + ?Sized> {
    fn id(&self) -> SourceId;

    /// Unscaled frame size. Either dimension may be zero while the source has no video.
    fn base_size(&self) -> Canvas;

    fn output_flags(&self) -> OutputFlags;

    /// Pick the space this source renders in, given the caller's candidates in order of
    /// preference.
    fn color_space(&self, preferred: &[ColorSpace]) -> ColorSpace;

    /// Render through the source's own pipeline, including any filters before this one.
    fn video_render(&mut self, gfx: &mut G);

    /// Render the raw frame with the host's default effect.
    fn default_render(&mut self, gfx: &mut G);
}

/// A filter's position in the host's filter chain.
pub trait FilterContext<G: Graphics + ?Sized> {
    /// Next source down the chain: the previous filter, or the parent if this filter is first.
    fn target(&mut self) -> Option<&mut dyn VideoSource<G>>;

    fn target_id(&self) -> Option<SourceId>;

    /// The source the filter chain is attached to.
    fn parent_id(&self) -> Option<SourceId>;

    /// Luminance in nits of SDR white in the host's video output.
    fn sdr_white_level(&self) -> f32;
}
