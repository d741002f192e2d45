//! Stack Tower - a block-stacking precision game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, trimming, scoring, camera, state machine)
//! - `config`: Tunable game constants and scoring/camera variants
//! - `persistence`: Best-score storage collaborators
//! - `platform`: Frame clock adapter turning wall time into fixed ticks
//! - `session`: A game wired to a best-score store

pub mod config;
pub mod error;
pub mod persistence;
pub mod platform;
pub mod session;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{CameraSign, GameConfig, ScoringPolicy};
pub use error::{ConfigError, SimError, StoreError};
pub use session::Session;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest wall-clock frame the clock adapter will simulate
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Every block shares this height
    pub const BLOCK_HEIGHT: f32 = 40.0;
    /// Foundation width before the viewport cap is applied
    pub const STARTING_WIDTH: f32 = 180.0;
    /// Foundation never takes more than this share of the viewport
    pub const FOUNDATION_VIEWPORT_SHARE: f32 = 0.8;
    /// A trimmed block this thin or thinner ends the game
    pub const MIN_BLOCK_WIDTH: f32 = 1.0;
    /// Overlaps narrower than this count as no overlap at all
    pub const OVERLAP_NOISE_FLOOR: f32 = 0.1;

    /// Seconds for one full left-right-left sweep
    pub const MOTION_PERIOD: f32 = 4.0;
    /// Pause between a successful placement and the next spawn
    pub const SPAWN_DELAY: f32 = 0.2;

    /// First level at which the camera starts following the tower
    pub const CAMERA_ACTIVATION_LEVEL: u32 = 9;

    /// Precision scoring: flat points per placement
    pub const SCORE_BASE: u64 = 10;
    /// Precision scoring: bonus for a perfect overlap
    pub const SCORE_PRECISION_BONUS: f32 = 50.0;

    /// Number of distinct block colors cycled by level
    pub const COLOR_CYCLE: u32 = 8;
}

/// Wrap a phase value into [0, 2π)
#[inline]
pub fn wrap_phase(phase: f32) -> f32 {
    use std::f32::consts::TAU;
    let wrapped = phase.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Check a caller-supplied viewport width
#[inline]
pub fn check_viewport(width: f32) -> Result<f32, SimError> {
    if width.is_finite() && width > 0.0 {
        Ok(width)
    } else {
        Err(SimError::InvalidViewport { width })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{PI, TAU};

    #[test]
    fn test_wrap_phase() {
        assert_eq!(wrap_phase(0.0), 0.0);
        assert!((wrap_phase(TAU + 1.0) - 1.0).abs() < 1e-5);
        assert!((wrap_phase(-PI) - PI).abs() < 1e-5);
        assert!(wrap_phase(TAU) < TAU);
        assert!(wrap_phase(-1e-9) < TAU);
    }

    #[test]
    fn test_check_viewport() {
        assert_eq!(check_viewport(320.0), Ok(320.0));
        assert!(check_viewport(0.0).is_err());
        assert!(check_viewport(-5.0).is_err());
        assert!(check_viewport(f32::NAN).is_err());
        assert!(check_viewport(f32::INFINITY).is_err());
    }
}
