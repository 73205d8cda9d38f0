use super::*;
use crate::config::params::{KEY_FOV, KEY_ROT_Y, KEY_SCALE_X};
use crate::foundation::core::{Canvas, Vec2};
use crate::foundation::error::FxError;
use crate::test_support::{NullGraphics, StubChain};

fn settings() -> FilterSettings {
    let mut s = FilterSettings::new();
    PerspectiveFilter::defaults(&mut s);
    s
}

fn render_once(filter: &mut PerspectiveFilter, space: ColorSpace) {
    let mut gfx = NullGraphics::default();
    let mut chain = StubChain::attached(Canvas::new(64, 32).unwrap(), space);
    let outcome = VideoFilter::<NullGraphics>::video_render(filter, &mut chain, &mut gfx);
    assert!(matches!(outcome, RenderOutcome::Ready { .. }));
}

#[test]
fn create_reads_settings() {
    let mut s = settings();
    s.set_double(KEY_SCALE_X, 250.0);
    let f = PerspectiveFilter::new(&s).unwrap();
    assert_eq!(f.params().scale, Vec2::new(2.5, 1.0));
    assert_eq!(f.params().fov_deg, 90.0);
}

#[test]
fn rejected_update_keeps_previous_parameters() {
    let mut f = PerspectiveFilter::new(&settings()).unwrap();

    let mut s = settings();
    s.set_double(KEY_ROT_Y, 45.0);
    VideoFilter::<NullGraphics>::update(&mut f, &s).unwrap();
    assert_eq!(f.params().rotation_deg.y, 45.0);

    s.set_double(KEY_FOV, 0.0);
    let err = VideoFilter::<NullGraphics>::update(&mut f, &s).unwrap_err();
    assert!(matches!(err, FxError::Validation(_)));
    assert_eq!(f.params().rotation_deg.y, 45.0);
    assert_eq!(f.params().fov_deg, 90.0);
}

#[test]
fn color_space_without_chain_uses_first_candidate() {
    let f = PerspectiveFilter::new(&settings()).unwrap();
    let chain = StubChain::detached();
    let preferred = [ColorSpace::Rec709Extended, ColorSpace::Srgb];
    assert_eq!(
        VideoFilter::<NullGraphics>::video_color_space(&f, &chain, &preferred),
        ColorSpace::Rec709Extended
    );
    assert_eq!(
        VideoFilter::<NullGraphics>::video_color_space(&f, &chain, &[]),
        ColorSpace::Srgb
    );
}

#[test]
fn color_space_reports_last_render_space_when_offered() {
    let mut f = PerspectiveFilter::new(&settings()).unwrap();
    render_once(&mut f, ColorSpace::Rec709Extended);

    let chain = StubChain::attached(Canvas::new(64, 32).unwrap(), ColorSpace::Srgb);
    let offered = [ColorSpace::Srgb, ColorSpace::Rec709Extended];
    assert_eq!(
        VideoFilter::<NullGraphics>::video_color_space(&f, &chain, &offered),
        ColorSpace::Rec709Extended
    );
}

#[test]
fn color_space_falls_back_to_first_candidate_when_not_offered() {
    let mut f = PerspectiveFilter::new(&settings()).unwrap();
    render_once(&mut f, ColorSpace::Rec709Extended);

    let chain = StubChain::attached(Canvas::new(64, 32).unwrap(), ColorSpace::Srgb);
    let offered = [ColorSpace::Srgb16F, ColorSpace::Srgb];
    assert_eq!(
        VideoFilter::<NullGraphics>::video_color_space(&f, &chain, &offered),
        ColorSpace::Srgb16F
    );
    assert_eq!(
        VideoFilter::<NullGraphics>::video_color_space(&f, &chain, &[]),
        ColorSpace::Rec709Extended
    );
}

#[test]
fn destroy_releases_surface() {
    let mut f = PerspectiveFilter::new(&settings()).unwrap();
    render_once(&mut f, ColorSpace::Srgb);
    assert!(f.compositor().surface().is_some());

    let mut gfx = NullGraphics::default();
    VideoFilter::<NullGraphics>::destroy(&mut f, &mut gfx);
    assert!(f.compositor().surface().is_none());
}
