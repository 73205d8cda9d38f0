//! Color-space handling for the composite step.

/// Technique and multiplier selection between render and output color spaces.
pub mod resolve;
