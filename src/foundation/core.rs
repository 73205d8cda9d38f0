use crate::foundation::error::{FxError, FxResult};

pub use glam::{DMat4, DVec3, DVec4, Mat4, Vec3};
pub use kurbo::{Point, Vec2};

/// Pixel dimensions of a source frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> FxResult<Self> {
        if width == 0 || height == 0 {
            return Err(FxError::validation(format!(
                "canvas dimensions must be non-zero, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Color space a surface is rendered in or a render target expects.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ColorSpace {
    /// Display-referred sRGB, 8 bits per channel.
    #[default]
    Srgb,
    /// Display-referred sRGB stored at half-float precision.
    Srgb16F,
    /// Rec. 709 primaries, linear light, values above 1.0 allowed.
    Rec709Extended,
    /// scRGB: Rec. 709 linear where 1.0 is 80 nits.
    Rec709ScRgb,
}

impl ColorSpace {
    /// Spaces the offscreen pass asks the upstream source for, most preferred first.
    pub const OFFSCREEN_PREFERENCE: [ColorSpace; 3] = [
        ColorSpace::Srgb,
        ColorSpace::Srgb16F,
        ColorSpace::Rec709Extended,
    ];

    pub fn is_standard(self) -> bool {
        matches!(self, ColorSpace::Srgb | ColorSpace::Srgb16F)
    }

    /// Storage format a render target needs to hold this space without clipping.
    pub fn pixel_format(self) -> PixelFormat {
        match self {
            ColorSpace::Srgb => PixelFormat::Rgba8,
            ColorSpace::Srgb16F | ColorSpace::Rec709Extended | ColorSpace::Rec709ScRgb => {
                PixelFormat::Rgba16F
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PixelFormat {
    Rgba8,
    Rgba16F,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlendFactor {
    Zero,
    One,
    InvSrcAlpha,
}

/// Source and destination factors for color blending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlendFunc {
    pub src: BlendFactor,
    pub dst: BlendFactor,
}

impl BlendFunc {
    /// Overwrite the destination with the source, alpha included.
    pub const OPAQUE: BlendFunc = BlendFunc {
        src: BlendFactor::One,
        dst: BlendFactor::Zero,
    };

    /// Premultiplied alpha-over.
    pub const PREMUL_OVER: BlendFunc = BlendFunc {
        src: BlendFactor::One,
        dst: BlendFactor::InvSrcAlpha,
    };
}

/// Identity of a host source, used to tell a filter's target apart from its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceId(pub u64);

/// Handle to an offscreen render surface owned by a [`crate::Graphics`] implementation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub u32);

/// Handle to the texture backing a rendered surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u32);

/// Capability bits a source reports about how it produces video.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputFlags {
    /// The source draws itself with its own effect instead of the default one.
    pub custom_draw: bool,
    /// The source delivers frames asynchronously (e.g. decoded media).
    pub async_video: bool,
}

impl OutputFlags {
    /// Whether the host's default render path can draw this source directly.
    pub fn supports_default_render(self) -> bool {
        !self.custom_draw && !self.async_video
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
