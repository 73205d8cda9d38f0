use crate::color::resolve::resolve_composition;
use crate::foundation::core::{BlendFunc, Canvas, ColorSpace, TextureId};
use crate::render::graphics::{Graphics, PARAM_IMAGE, PARAM_MULTIPLIER};

/// Composite a rendered surface onto the bound target with premultiplied alpha-over.
///
/// `rendered_space` is the space the texture was rendered in; the technique and multiplier
/// are resolved against the target's current space on every call. Blend state and the
/// framebuffer sRGB flag are restored before returning. Returns `false` without touching any
/// state when there is no texture to draw.
pub fn draw_frame<G: Graphics + ?Sized>(
    gfx: &mut G,
    texture: Option<TextureId>,
    rendered_space: ColorSpace,
    sdr_white_level: f32,
    size: Canvas,
) -> bool {
    let Some(texture) = texture else {
        return false;
    };
    let decision = resolve_composition(gfx.color_space(), rendered_space, sdr_white_level);

    gfx.blend_state_push();
    gfx.blend_function(BlendFunc::PREMUL_OVER);

    let previous = gfx.framebuffer_srgb_enabled();
    gfx.enable_framebuffer_srgb(true);

    gfx.set_texture_srgb(PARAM_IMAGE, texture);
    gfx.set_float(PARAM_MULTIPLIER, decision.multiplier);
    gfx.draw_sprite(decision.technique, texture, size);

    gfx.enable_framebuffer_srgb(previous);
    gfx.blend_state_pop();
    true
}
