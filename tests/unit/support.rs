use crate::color::resolve::Technique;
use crate::foundation::core::{
    BlendFunc, Canvas, ColorSpace, Mat4, PixelFormat, SourceId, SurfaceId, TextureId,
};
use crate::foundation::error::FxResult;
use crate::render::graphics::Graphics;
use crate::render::source::{FilterContext, VideoSource};

/// Graphics device that accepts every call and renders nothing.
#[derive(Default)]
pub(crate) struct NullGraphics {
    next_surface: u32,
}

impl Graphics for NullGraphics {
    fn create_surface(&mut self, _format: PixelFormat) -> FxResult<SurfaceId> {
        self.next_surface += 1;
        Ok(SurfaceId(self.next_surface))
    }
    fn destroy_surface(&mut self, _surface: SurfaceId) {}
    fn reset_surface(&mut self, _surface: SurfaceId) {}
    fn begin_surface(&mut self, _surface: SurfaceId, _size: Canvas, _space: ColorSpace) -> bool {
        true
    }
    fn end_surface(&mut self, _surface: SurfaceId) {}
    fn surface_texture(&self, surface: SurfaceId) -> Option<TextureId> {
        Some(TextureId(surface.0))
    }
    fn clear(&mut self, _rgba: [f32; 4]) {}
    fn viewport_push(&mut self) {}
    fn viewport_pop(&mut self) {}
    fn matrix_push(&mut self) {}
    fn matrix_pop(&mut self) {}
    fn load_transform(&mut self, _m: Mat4) {}
    fn blend_state_push(&mut self) {}
    fn blend_state_pop(&mut self) {}
    fn blend_function(&mut self, _func: BlendFunc) {}
    fn framebuffer_srgb_enabled(&self) -> bool {
        false
    }
    fn enable_framebuffer_srgb(&mut self, _enabled: bool) {}
    fn color_space(&self) -> ColorSpace {
        ColorSpace::Srgb
    }
    fn set_texture_srgb(&mut self, _param: &str, _texture: TextureId) {}
    fn set_float(&mut self, _param: &str, _value: f32) {}
    fn draw_sprite(&mut self, _technique: Technique, _texture: TextureId, _size: Canvas) {}
}

/// Source that renders nothing and prefers a fixed space.
pub(crate) struct StubSource {
    pub(crate) size: Canvas,
    pub(crate) space: ColorSpace,
}

impl VideoSource<NullGraphics> for StubSource {
    fn id(&self) -> SourceId {
        SourceId(1)
    }
    fn base_size(&self) -> Canvas {
        self.size
    }
    fn output_flags(&self) -> crate::foundation::core::OutputFlags {
        Default::default()
    }
    fn color_space(&self, _preferred: &[ColorSpace]) -> ColorSpace {
        self.space
    }
    fn video_render(&mut self, _gfx: &mut NullGraphics) {}
    fn default_render(&mut self, _gfx: &mut NullGraphics) {}
}

/// Filter chain where the stub source is both target and parent, or neither.
pub(crate) struct StubChain {
    pub(crate) source: Option<StubSource>,
}

impl StubChain {
    pub(crate) fn attached(size: Canvas, space: ColorSpace) -> Self {
        Self {
            source: Some(StubSource { size, space }),
        }
    }

    pub(crate) fn detached() -> Self {
        Self { source: None }
    }
}

impl FilterContext<NullGraphics> for StubChain {
    fn target(&mut self) -> Option<&mut dyn VideoSource<NullGraphics>> {
        self.source
            .as_mut()
            .map(|s| s as &mut dyn VideoSource<NullGraphics>)
    }
    fn target_id(&self) -> Option<SourceId> {
        self.source.as_ref().map(|s| s.id())
    }
    fn parent_id(&self) -> Option<SourceId> {
        self.target_id()
    }
    fn sdr_white_level(&self) -> f32 {
        300.0
    }
}
