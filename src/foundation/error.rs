/// Convenience result type used across the filter.
pub type FxResult<T> = Result<T, FxError>;

/// Top-level error taxonomy for configuration and registration APIs.
///
/// The per-frame render path never returns these: upstream and GPU failures degrade to
/// drawing nothing for the current tick.
#[derive(thiserror::Error, Debug)]
pub enum FxError {
    /// Invalid user-provided settings or frame dimensions.
    #[error("validation error: {0}")]
    Validation(String),

    /// Graphics resources could not be acquired.
    #[error("graphics error: {0}")]
    Graphics(String),

    /// Errors when serializing or deserializing settings.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FxError {
    /// Build a [`FxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FxError::Graphics`] value.
    pub fn graphics(msg: impl Into<String>) -> Self {
        Self::Graphics(msg.into())
    }

    /// Build a [`FxError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
