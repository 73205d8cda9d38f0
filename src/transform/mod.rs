//! Perspective transform for source frames.

/// Projection × model matrix composition.
pub mod matrix;
