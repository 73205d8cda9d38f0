//! Per-tick offscreen render of the upstream source through the perspective transform.

use crate::config::params::TransformParameters;
use crate::foundation::core::{BlendFunc, Canvas, ColorSpace, PixelFormat, SurfaceId, TextureId};
use crate::render::graphics::Graphics;
use crate::render::source::FilterContext;
use crate::transform::matrix::TransformMatrix;

/// Whether the source has been rendered into the surface during the current tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TickPhase {
    #[default]
    Pending,
    Rendered,
}

/// Result of a render request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The surface is current for this tick; composite it at the source's size.
    Ready { size: Canvas },
    /// Upstream cannot be transformed this tick; the host should show it unmodified.
    PassThrough,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CachedSurface {
    id: SurfaceId,
    format: PixelFormat,
}

/// Owns the intermediate surface and re-renders the source into it at most once per tick.
#[derive(Debug, Default)]
pub struct OffscreenCompositor {
    phase: TickPhase,
    surface: Option<CachedSurface>,
    space: ColorSpace,
    frame_ready: bool,
}

impl OffscreenCompositor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> TickPhase {
        self.phase
    }

    /// Color space of the last successful render.
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    pub fn surface(&self) -> Option<SurfaceId> {
        self.surface.map(|s| s.id)
    }

    pub fn surface_format(&self) -> Option<PixelFormat> {
        self.surface.map(|s| s.format)
    }

    /// Start a new output tick. The next render request re-renders the source.
    pub fn tick(&mut self) {
        self.phase = TickPhase::Pending;
    }

    /// Render the upstream source through `params` unless it was already rendered this tick.
    pub fn render<G: Graphics + ?Sized>(
        &mut self,
        ctx: &mut dyn FilterContext<G>,
        gfx: &mut G,
        params: &TransformParameters,
    ) -> RenderOutcome {
        let target_id = ctx.target_id();
        let parent_id = ctx.parent_id();
        let Some(target) = ctx.target() else {
            tracing::trace!("no filter target, passing through");
            return RenderOutcome::PassThrough;
        };
        let size = target.base_size();
        if size.is_empty() || parent_id.is_none() {
            tracing::trace!(
                width = size.width,
                height = size.height,
                has_parent = parent_id.is_some(),
                "source not renderable, passing through"
            );
            return RenderOutcome::PassThrough;
        }

        if self.phase == TickPhase::Rendered {
            return RenderOutcome::Ready { size };
        }
        self.phase = TickPhase::Rendered;

        let space = target.color_space(&ColorSpace::OFFSCREEN_PREFERENCE);
        let Some(surface) = self.prepare_surface(gfx, space.pixel_format()) else {
            self.frame_ready = false;
            return RenderOutcome::Ready { size };
        };

        gfx.viewport_push();
        gfx.matrix_push();
        gfx.blend_state_push();
        gfx.blend_function(BlendFunc::OPAQUE);

        if gfx.begin_surface(surface, size, space) {
            gfx.clear([0.0; 4]);
            let transform =
                TransformMatrix::compose(params, f64::from(size.width), f64::from(size.height));
            gfx.load_transform(transform.matrix());

            let use_default = target_id.is_some()
                && target_id == parent_id
                && target.output_flags().supports_default_render();
            if use_default {
                target.default_render(gfx);
            } else {
                target.video_render(gfx);
            }

            gfx.end_surface(surface);
            self.space = space;
            self.frame_ready = true;
        } else {
            tracing::warn!(?surface, "could not bind offscreen surface, skipping tick");
            self.frame_ready = false;
        }

        gfx.blend_state_pop();
        gfx.matrix_pop();
        gfx.viewport_pop();

        RenderOutcome::Ready { size }
    }

    /// Texture of this tick's render, if the render succeeded.
    pub fn texture<G: Graphics + ?Sized>(&self, gfx: &G) -> Option<TextureId> {
        if !self.frame_ready {
            return None;
        }
        self.surface.and_then(|s| gfx.surface_texture(s.id))
    }

    /// Destroy the cached surface.
    pub fn release<G: Graphics + ?Sized>(&mut self, gfx: &mut G) {
        if let Some(s) = self.surface.take() {
            tracing::debug!(surface = ?s.id, "releasing offscreen surface");
            gfx.destroy_surface(s.id);
        }
        self.frame_ready = false;
        self.phase = TickPhase::Pending;
    }

    fn prepare_surface<G: Graphics + ?Sized>(
        &mut self,
        gfx: &mut G,
        format: PixelFormat,
    ) -> Option<SurfaceId> {
        if let Some(s) = self.surface
            && s.format == format
        {
            gfx.reset_surface(s.id);
            return Some(s.id);
        }

        if let Some(stale) = self.surface.take() {
            tracing::debug!(
                surface = ?stale.id,
                from = ?stale.format,
                to = ?format,
                "surface format changed, recreating"
            );
            gfx.destroy_surface(stale.id);
        }

        match gfx.create_surface(format) {
            Ok(id) => {
                tracing::debug!(surface = ?id, ?format, "created offscreen surface");
                self.surface = Some(CachedSurface { id, format });
                Some(id)
            }
            Err(err) => {
                tracing::warn!(%err, ?format, "offscreen surface allocation failed");
                None
            }
        }
    }
}
