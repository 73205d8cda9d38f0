use std::collections::BTreeMap;
use std::path::Path;

use crate::foundation::error::{FxError, FxResult};

/// Named floating-point settings with host-supplied defaults.
///
/// Mirrors the host's settings object: user values shadow defaults, and a key with neither
/// reads as `0.0`. Only user values are (de)serialized; defaults are re-registered by the
/// filter type every time settings are created.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct FilterSettings {
    values: BTreeMap<String, f64>,
    #[serde(skip)]
    defaults: BTreeMap<String, f64>,
}

impl FilterSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse user values from a JSON object of numbers.
    pub fn from_json_str(s: &str) -> FxResult<Self> {
        serde_json::from_str(s).map_err(|e| FxError::serde(e.to_string()))
    }

    /// Read user values from a JSON file.
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> FxResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            FxError::Other(anyhow::Error::new(e).context(format!("read '{}'", path.display())))
        })?;
        let settings = Self::from_json_str(&text)?;
        tracing::debug!(keys = settings.values.len(), "loaded filter settings");
        Ok(settings)
    }

    pub fn to_json_string(&self) -> FxResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| FxError::serde(e.to_string()))
    }

    pub fn set_double(&mut self, key: &str, value: f64) {
        self.values.insert(key.to_owned(), value);
    }

    pub fn set_default_double(&mut self, key: &str, value: f64) {
        self.defaults.insert(key.to_owned(), value);
    }

    pub fn get_double(&self, key: &str) -> f64 {
        self.values
            .get(key)
            .or_else(|| self.defaults.get(key))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn get_default_double(&self, key: &str) -> f64 {
        self.defaults.get(key).copied().unwrap_or(0.0)
    }

    pub fn has_user_value(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Drop a user value so the key falls back to its default.
    pub fn erase(&mut self, key: &str) {
        self.values.remove(key);
    }

    /// Overlay another settings object's user values onto this one.
    pub fn apply(&mut self, other: &FilterSettings) {
        for (k, v) in &other.values {
            self.values.insert(k.clone(), *v);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;
