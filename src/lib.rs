//! Perspective 3D transform filter for video frames.
//!
//! The filter renders its upstream source through a projection × model transform built from
//! field of view, position, rotation and scale, into an intermediate surface. It then
//! composites that surface onto the output with color-space aware blending.
//!
//! # Pipeline overview
//!
//! 1. **Transform**: `TransformParameters + Canvas -> TransformMatrix` ([`TransformMatrix`])
//! 2. **Offscreen render**: once per tick, the source is drawn through the matrix into a
//!    surface whose format follows the negotiated color space ([`OffscreenCompositor`])
//! 3. **Composite**: the surface is drawn onto the output with a technique and multiplier
//!    chosen from the two color spaces ([`resolve_composition`], [`draw_frame`])
//!
//! The host's GPU layer and filter chain are reached only through the [`Graphics`],
//! [`VideoSource`] and [`FilterContext`] traits. Hosts drive instances through
//! [`VideoFilter`] and discover filter types through a [`FilterRegistry`].
#![forbid(unsafe_code)]

mod foundation;

/// Color-space handling for the composite step.
pub mod color;
/// Settings and typed transform parameters.
pub mod config;
/// Filter lifecycle and registry.
pub mod filter;
/// Offscreen render and composite.
pub mod render;
/// Perspective transform composition.
pub mod transform;

#[cfg(test)]
#[path = "../tests/unit/support.rs"]
mod test_support;

pub use color::resolve::{CompositionDecision, SCRGB_WHITE_NITS, Technique, resolve_composition};
pub use config::params::TransformParameters;
pub use config::settings::FilterSettings;
pub use filter::VideoFilter;
pub use filter::perspective::{PERSPECTIVE_FILTER_ID, PerspectiveFilter};
pub use filter::registry::{FilterDescriptor, FilterRegistry};
pub use foundation::core::{
    BlendFactor, BlendFunc, Canvas, ColorSpace, Mat4, OutputFlags, PixelFormat, Point, SourceId,
    SurfaceId, TextureId, Vec2, Vec3,
};
pub use foundation::error::{FxError, FxResult};
pub use render::draw::draw_frame;
pub use render::graphics::{Graphics, PARAM_IMAGE, PARAM_MULTIPLIER};
pub use render::offscreen::{OffscreenCompositor, RenderOutcome, TickPhase};
pub use render::source::{FilterContext, VideoSource};
pub use transform::matrix::TransformMatrix;
