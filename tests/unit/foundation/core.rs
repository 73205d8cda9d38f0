use super::*;

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());

    let c = Canvas::new(1920, 1080).unwrap();
    assert!(!c.is_empty());
}

#[test]
fn only_plain_srgb_uses_eight_bit_storage() {
    assert_eq!(ColorSpace::Srgb.pixel_format(), PixelFormat::Rgba8);
    assert_eq!(ColorSpace::Srgb16F.pixel_format(), PixelFormat::Rgba16F);
    assert_eq!(ColorSpace::Rec709Extended.pixel_format(), PixelFormat::Rgba16F);
    assert_eq!(ColorSpace::Rec709ScRgb.pixel_format(), PixelFormat::Rgba16F);
}

#[test]
fn standard_spaces_are_the_srgb_pair() {
    assert!(ColorSpace::Srgb.is_standard());
    assert!(ColorSpace::Srgb16F.is_standard());
    assert!(!ColorSpace::Rec709Extended.is_standard());
    assert!(!ColorSpace::Rec709ScRgb.is_standard());
}

#[test]
fn default_render_requires_plain_synchronous_source() {
    assert!(OutputFlags::default().supports_default_render());
    assert!(
        !OutputFlags {
            custom_draw: true,
            async_video: false
        }
        .supports_default_render()
    );
    assert!(
        !OutputFlags {
            custom_draw: false,
            async_video: true
        }
        .supports_default_render()
    );
}
