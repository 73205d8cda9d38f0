//! Filter configuration: the host-style settings object and the typed transform parameters
//! read from it.

/// Typed transform parameters and the settings keys they are read from.
pub mod params;
/// Named floating-point settings with defaults.
pub mod settings;
