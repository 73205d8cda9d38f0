use crate::config::settings::FilterSettings;
use crate::foundation::core::{Vec2, Vec3};
use crate::foundation::error::{FxError, FxResult};

pub const KEY_FOV: &str = "fov";
pub const KEY_ROT_X: &str = "rot_x";
pub const KEY_ROT_Y: &str = "rot_y";
pub const KEY_ROT_Z: &str = "rot_z";
pub const KEY_POS_X: &str = "pos_x";
pub const KEY_POS_Y: &str = "pos_y";
pub const KEY_POS_Z: &str = "pos_z";
pub const KEY_SCALE_X: &str = "scale_x";
pub const KEY_SCALE_Y: &str = "scale_y";
pub const KEY_SHEAR_X: &str = "shear_x";
pub const KEY_SHEAR_Y: &str = "shear_y";

pub const DEFAULT_FOV_DEG: f64 = 90.0;
pub const DEFAULT_SCALE_PERCENT: f64 = 100.0;

/// Register the filter's defaults on a settings object.
pub fn register_defaults(settings: &mut FilterSettings) {
    settings.set_default_double(KEY_FOV, DEFAULT_FOV_DEG);
    settings.set_default_double(KEY_SCALE_X, DEFAULT_SCALE_PERCENT);
    settings.set_default_double(KEY_SCALE_Y, DEFAULT_SCALE_PERCENT);
}

/// User-facing parameters of the perspective transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformParameters {
    /// Vertical field of view in degrees, in `(0, 180)`.
    pub fov_deg: f32,
    /// Offset in source pixels.
    pub position: Vec3,
    /// Euler angles in degrees, applied X then Y then Z.
    pub rotation_deg: Vec3,
    /// Multiplier per axis, 1.0 = unscaled.
    pub scale: Vec2,
    /// Stored but not applied to the transform.
    pub shear: Vec2,
}

impl Default for TransformParameters {
    fn default() -> Self {
        Self {
            fov_deg: DEFAULT_FOV_DEG as f32,
            position: Vec3::ZERO,
            rotation_deg: Vec3::ZERO,
            scale: Vec2::new(1.0, 1.0),
            shear: Vec2::ZERO,
        }
    }
}

impl TransformParameters {
    /// Read parameters from settings, converting percent scale into a multiplier.
    pub fn from_settings(settings: &FilterSettings) -> FxResult<Self> {
        let get = |key: &str| settings.get_double(key) as f32;

        let params = Self {
            fov_deg: get(KEY_FOV),
            rotation_deg: Vec3::new(get(KEY_ROT_X), get(KEY_ROT_Y), get(KEY_ROT_Z)),
            position: Vec3::new(get(KEY_POS_X), get(KEY_POS_Y), get(KEY_POS_Z)),
            scale: Vec2::new(
                settings.get_double(KEY_SCALE_X) / 100.0,
                settings.get_double(KEY_SCALE_Y) / 100.0,
            ),
            shear: Vec2::new(
                settings.get_double(KEY_SHEAR_X),
                settings.get_double(KEY_SHEAR_Y),
            ),
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> FxResult<()> {
        if !(self.fov_deg > 0.0 && self.fov_deg < 180.0) {
            return Err(FxError::validation(format!(
                "fov must be in (0, 180) degrees, got {}",
                self.fov_deg
            )));
        }
        if !self.position.is_finite() || !self.rotation_deg.is_finite() {
            return Err(FxError::validation("position and rotation must be finite"));
        }
        if !self.scale.is_finite() || !self.shear.is_finite() {
            return Err(FxError::validation("scale and shear must be finite"));
        }
        Ok(())
    }

    /// Write these parameters back as user values, in the settings' percent units.
    pub fn write_to(&self, settings: &mut FilterSettings) {
        settings.set_double(KEY_FOV, f64::from(self.fov_deg));
        settings.set_double(KEY_ROT_X, f64::from(self.rotation_deg.x));
        settings.set_double(KEY_ROT_Y, f64::from(self.rotation_deg.y));
        settings.set_double(KEY_ROT_Z, f64::from(self.rotation_deg.z));
        settings.set_double(KEY_POS_X, f64::from(self.position.x));
        settings.set_double(KEY_POS_Y, f64::from(self.position.y));
        settings.set_double(KEY_POS_Z, f64::from(self.position.z));
        settings.set_double(KEY_SCALE_X, self.scale.x * 100.0);
        settings.set_double(KEY_SCALE_Y, self.scale.y * 100.0);
        settings.set_double(KEY_SHEAR_X, self.shear.x);
        settings.set_double(KEY_SHEAR_Y, self.shear.y);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/params.rs"]
mod tests;
