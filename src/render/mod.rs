//! Offscreen rendering and final composite of the transformed frame.
//!
//! A frame goes through two stages. [`offscreen::OffscreenCompositor`] renders the upstream
//! source through the perspective transform into an intermediate surface, once per tick.
//! [`draw::draw_frame`] then composites that surface onto the output as often as the host asks.

/// Final composite of the intermediate surface.
pub mod draw;
/// Graphics device contract.
pub mod graphics;
/// Intermediate surface ownership and the per-tick render state machine.
pub mod offscreen;
/// Host source and filter-chain contracts.
pub mod source;
