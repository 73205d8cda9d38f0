//! Color-space aware choice of the shader technique used to composite the offscreen surface.

use crate::foundation::core::ColorSpace;

/// Luminance in nits that scRGB maps to 1.0.
pub const SCRGB_WHITE_NITS: f32 = 80.0;

/// Shader technique used to draw the offscreen surface onto the output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Technique {
    /// Sample and write unchanged.
    Copy,
    /// Scale linear values by the multiplier.
    Multiply,
    /// Compress out-of-range highlights into [0, 1].
    Tonemap,
    /// Scale by the multiplier, then tonemap.
    MultiplyTonemap,
}

impl Technique {
    /// Technique name in the host's default draw effect.
    pub fn shader_name(self) -> &'static str {
        match self {
            Technique::Copy => "Draw",
            Technique::Multiply => "DrawMultiply",
            Technique::Tonemap => "DrawTonemap",
            Technique::MultiplyTonemap => "DrawMultiplyTonemap",
        }
    }
}

/// How to get pixels rendered in one space onto a target in another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompositionDecision {
    pub technique: Technique,
    pub multiplier: f32,
}

impl CompositionDecision {
    pub const COPY: CompositionDecision = CompositionDecision {
        technique: Technique::Copy,
        multiplier: 1.0,
    };

    fn new(technique: Technique, multiplier: f32) -> Self {
        Self {
            technique,
            multiplier,
        }
    }
}

/// Pick the technique and brightness multiplier for drawing a surface rendered in `source`
/// onto a target in `current`.
///
/// `sdr_white_level` is the luminance in nits that display-referred white maps to. It must be
/// positive; the host clamps its setting to a sane range before it reaches here.
pub fn resolve_composition(
    current: ColorSpace,
    source: ColorSpace,
    sdr_white_level: f32,
) -> CompositionDecision {
    let to_scrgb = sdr_white_level / SCRGB_WHITE_NITS;
    let from_scrgb = SCRGB_WHITE_NITS / sdr_white_level;

    match (source, current) {
        (ColorSpace::Srgb | ColorSpace::Srgb16F, ColorSpace::Rec709ScRgb) => {
            CompositionDecision::new(Technique::Multiply, to_scrgb)
        }
        (ColorSpace::Rec709Extended, dst) if dst.is_standard() => {
            CompositionDecision::new(Technique::Tonemap, 1.0)
        }
        (ColorSpace::Rec709Extended, ColorSpace::Rec709ScRgb) => {
            CompositionDecision::new(Technique::Multiply, to_scrgb)
        }
        (ColorSpace::Rec709ScRgb, dst) if dst.is_standard() => {
            CompositionDecision::new(Technique::MultiplyTonemap, from_scrgb)
        }
        (ColorSpace::Rec709ScRgb, ColorSpace::Rec709Extended) => {
            CompositionDecision::new(Technique::Multiply, from_scrgb)
        }
        _ => CompositionDecision::COPY,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/resolve.rs"]
mod tests;
