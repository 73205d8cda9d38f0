use crate::config::params::{TransformParameters, register_defaults};
use crate::config::settings::FilterSettings;
use crate::filter::registry::FilterDescriptor;
use crate::filter::VideoFilter;
use crate::foundation::core::ColorSpace;
use crate::foundation::error::FxResult;
use crate::render::draw::draw_frame;
use crate::render::graphics::Graphics;
use crate::render::offscreen::{OffscreenCompositor, RenderOutcome};
use crate::render::source::FilterContext;

pub const PERSPECTIVE_FILTER_ID: &str = "perspective_filter";
pub const PERSPECTIVE_FILTER_NAME: &str = "3D Perspective";

/// Video filter that renders its input through a perspective 3D transform.
#[derive(Debug)]
pub struct PerspectiveFilter {
    params: TransformParameters,
    compositor: OffscreenCompositor,
}

impl PerspectiveFilter {
    pub fn new(settings: &FilterSettings) -> FxResult<Self> {
        Ok(Self {
            params: TransformParameters::from_settings(settings)?,
            compositor: OffscreenCompositor::new(),
        })
    }

    pub fn params(&self) -> &TransformParameters {
        &self.params
    }

    pub fn compositor(&self) -> &OffscreenCompositor {
        &self.compositor
    }

    pub fn defaults(settings: &mut FilterSettings) {
        register_defaults(settings);
    }

    pub fn descriptor<G: Graphics + ?Sized>() -> FilterDescriptor<G> {
        FilterDescriptor {
            id: PERSPECTIVE_FILTER_ID,
            display_name: PERSPECTIVE_FILTER_NAME,
            defaults: Self::defaults,
            create: create_boxed::<G>,
        }
    }
}

fn create_boxed<G: Graphics + ?Sized>(
    settings: &FilterSettings,
) -> FxResult<Box<dyn VideoFilter<G>>> {
    Ok(Box::new(PerspectiveFilter::new(settings)?))
}

impl<G: Graphics + ?Sized> VideoFilter<G> for PerspectiveFilter {
    fn update(&mut self, settings: &FilterSettings) -> FxResult<()> {
        self.params = TransformParameters::from_settings(settings)?;
        Ok(())
    }

    fn video_tick(&mut self, _seconds: f32) {
        self.compositor.tick();
    }

    fn video_render(&mut self, ctx: &mut dyn FilterContext<G>, gfx: &mut G) -> RenderOutcome {
        let outcome = self.compositor.render(ctx, gfx, &self.params);
        if let RenderOutcome::Ready { size } = outcome {
            let texture = self.compositor.texture(gfx);
            draw_frame(
                gfx,
                texture,
                self.compositor.space(),
                ctx.sdr_white_level(),
                size,
            );
        }
        outcome
    }

    fn video_color_space(
        &self,
        ctx: &dyn FilterContext<G>,
        preferred: &[ColorSpace],
    ) -> ColorSpace {
        if ctx.target_id().is_none() || ctx.parent_id().is_none() {
            return preferred.first().copied().unwrap_or_default();
        }
        let last = self.compositor.space();
        if preferred.is_empty() || preferred.contains(&last) {
            return last;
        }
        preferred[0]
    }

    fn destroy(&mut self, gfx: &mut G) {
        self.compositor.release(gfx);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filter/perspective.rs"]
mod tests;
