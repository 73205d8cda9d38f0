use crate::color::resolve::Technique;
use crate::foundation::core::{
    BlendFunc, Canvas, ColorSpace, Mat4, PixelFormat, SurfaceId, TextureId,
};
use crate::foundation::error::FxResult;

/// Texture parameter of the default draw effect.
pub const PARAM_IMAGE: &str = "image";
/// Brightness multiplier parameter of the default draw effect.
pub const PARAM_MULTIPLIER: &str = "multiplier";

/// Immediate-mode graphics device the filter renders through.
///
/// Modelled on a host GPU layer with explicit state stacks: every `*_push` must be matched by
/// the corresponding `*_pop` within the same call that pushed it.
pub trait Graphics {
    /// Allocate an offscreen surface. Its size is fixed by [`Graphics::begin_surface`].
    fn create_surface(&mut self, format: PixelFormat) -> FxResult<SurfaceId>;

    fn destroy_surface(&mut self, surface: SurfaceId);

    /// Invalidate the surface's contents so it can be rendered again.
    fn reset_surface(&mut self, surface: SurfaceId);

    /// Redirect drawing into `surface`. Returns `false` if the surface could not be bound;
    /// in that case [`Graphics::end_surface`] must not be called.
    fn begin_surface(&mut self, surface: SurfaceId, size: Canvas, space: ColorSpace) -> bool;

    fn end_surface(&mut self, surface: SurfaceId);

    /// Texture holding the surface's last completed render, if any.
    fn surface_texture(&self, surface: SurfaceId) -> Option<TextureId>;

    fn clear(&mut self, rgba: [f32; 4]);

    fn viewport_push(&mut self);
    fn viewport_pop(&mut self);

    fn matrix_push(&mut self);
    fn matrix_pop(&mut self);

    /// Replace the projection × model transform applied to subsequent draws.
    fn load_transform(&mut self, m: Mat4);

    fn blend_state_push(&mut self);
    fn blend_state_pop(&mut self);
    fn blend_function(&mut self, func: BlendFunc);

    fn framebuffer_srgb_enabled(&self) -> bool;
    fn enable_framebuffer_srgb(&mut self, enabled: bool);

    /// Color space of the render target currently bound.
    fn color_space(&self) -> ColorSpace;

    /// Bind a texture parameter, sampled with sRGB decoding.
    fn set_texture_srgb(&mut self, param: &str, texture: TextureId);
    fn set_float(&mut self, param: &str, value: f32);

    /// Draw `texture` as a `size` sprite with the default effect's `technique`.
    fn draw_sprite(&mut self, technique: Technique, texture: TextureId, size: Canvas);
}
