//! Horizontal oscillation of the moving block
//!
//! Position is a function of one global phase, not of how long the current
//! block has been airborne. The phase keeps running across spawns.

use std::f32::consts::TAU;

use crate::wrap_phase;

/// Advance a phase by `dt` for an oscillation of the given period
#[inline]
pub fn advance_phase(phase: f32, dt: f32, period: f32) -> f32 {
    wrap_phase(phase + TAU * dt / period)
}

/// Center x of a block of `width` at `phase` inside a viewport of `screen_width`
///
/// Sweeps the block's edges across `[0, screen_width]`.
#[inline]
pub fn position(phase: f32, width: f32, screen_width: f32) -> f32 {
    let normalized = (phase.sin() + 1.0) / 2.0;
    let range = screen_width - width;
    width / 2.0 + normalized * range
}

/// Where a new block sits before the first tick moves it: flush with the far edge
#[inline]
pub fn spawn_position(width: f32, screen_width: f32) -> f32 {
    screen_width - width / 2.0
}
