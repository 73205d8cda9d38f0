//! Composition of the perspective projection and model transform for one source frame.

use crate::config::params::TransformParameters;
use crate::foundation::core::{Canvas, DMat4, DVec3, DVec4, Mat4, Point};
use crate::foundation::error::{FxError, FxResult};

/// Near clip plane, `1 / 2^22`.
pub const NEAR_PLANE: f64 = 1.0 / (1u32 << 22) as f64;
/// Far clip plane, `2^22`.
pub const FAR_PLANE: f64 = (1u32 << 22) as f64;

/// Clip-space `w` below which a point is treated as lying on the camera plane.
const MIN_CLIP_W: f64 = 1e-9;

/// Projection × model matrix mapping source-frame pixels into clip space.
///
/// Composed in double precision: with the near plane at `2^-22` the projection's depth and
/// `w` rows differ by a few single-precision ulps, which is not enough to keep the product
/// invertible. [`TransformMatrix::matrix`] narrows to `f32` for the GPU.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformMatrix(DMat4);

impl TransformMatrix {
    /// Build the transform for a source of the given size.
    pub fn build(params: &TransformParameters, canvas: Canvas) -> FxResult<Self> {
        if canvas.is_empty() {
            return Err(FxError::validation(format!(
                "cannot build transform for {}x{} source",
                canvas.width, canvas.height
            )));
        }
        Ok(Self::compose(
            params,
            f64::from(canvas.width),
            f64::from(canvas.height),
        ))
    }

    /// Compose the transform without checking dimensions. `w` and `h` must be positive.
    ///
    /// Each step right-multiplies the accumulated matrix, so vertices see the steps in
    /// reverse: pixel space is first mapped to `[-1, 1]`, rotated in a square space, then
    /// offset, scaled, pushed back one unit and projected.
    pub fn compose(params: &TransformParameters, w: f64, h: f64) -> Self {
        let aspect = w / h;
        let position = params.position.as_dvec3();
        let rotation = params.rotation_deg.as_dvec3();

        let mut m = DMat4::perspective_rh_gl(
            f64::from(params.fov_deg).to_radians(),
            aspect,
            NEAR_PLANE,
            FAR_PLANE,
        );
        m *= DMat4::from_translation(DVec3::new(0.0, 0.0, -1.0));
        m *= DMat4::from_scale(DVec3::new(aspect, 1.0, 1.0));
        m *= DMat4::from_scale(DVec3::new(params.scale.x, params.scale.y, 1.0));
        m *= DMat4::from_translation(DVec3::new(
            position.x / w * 2.0,
            position.y / h * 2.0,
            position.z / (w + h),
        ));

        // Rotate in a square space so angles are not skewed by the frame's aspect.
        m *= DMat4::from_scale(DVec3::new(h / w, 1.0, 1.0));
        m *= DMat4::from_rotation_x(rotation.x.to_radians());
        m *= DMat4::from_rotation_y(rotation.y.to_radians());
        m *= DMat4::from_rotation_z(rotation.z.to_radians());
        m *= DMat4::from_scale(DVec3::new(aspect, 1.0, 1.0));

        m *= DMat4::from_translation(DVec3::new(-1.0, -1.0, 0.0));
        m *= DMat4::from_scale(DVec3::new(2.0 / w, 2.0 / h, 1.0));

        Self(m)
    }

    /// Single-precision copy for loading onto the GPU matrix stack.
    pub fn matrix(&self) -> Mat4 {
        self.0.as_mat4()
    }

    pub fn matrix_f64(&self) -> DMat4 {
        self.0
    }

    /// Row-major rows, for printing.
    pub fn rows(&self) -> [[f64; 4]; 4] {
        self.0.transpose().to_cols_array_2d()
    }

    /// Map a source pixel to normalized device coordinates.
    ///
    /// Returns `None` for points on or behind the camera plane.
    pub fn project_point(&self, p: Point) -> Option<Point> {
        let clip = self.0 * DVec4::new(p.x, p.y, 0.0, 1.0);
        if clip.w < MIN_CLIP_W {
            return None;
        }
        Some(Point::new(clip.x / clip.w, clip.y / clip.w))
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/matrix.rs"]
mod tests;
