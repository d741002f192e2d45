//! Game configuration
//!
//! Every tunable constant the simulation reads, plus the scoring and camera
//! variants. Fixed for the lifetime of a game; loadable from JSON.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Which score formula a session uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScoringPolicy {
    /// Flat base plus a bonus proportional to overlap, scaled by level
    #[default]
    Precision,
    /// One point per block stacked on the foundation
    Linear,
}

impl ScoringPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringPolicy::Precision => "Precision",
            ScoringPolicy::Linear => "Linear",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "precision" => Some(ScoringPolicy::Precision),
            "linear" => Some(ScoringPolicy::Linear),
            _ => None,
        }
    }
}

/// Direction the camera offset is reported in
///
/// Which one looks right depends on where the renderer puts its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CameraSign {
    /// Positive offsets (y-up renderers scroll the scene down by this much)
    #[default]
    Up,
    /// Negative offsets (y-down renderers)
    Down,
}

impl CameraSign {
    pub fn apply(&self, magnitude: f32) -> f32 {
        match self {
            CameraSign::Up => magnitude,
            CameraSign::Down => -magnitude,
        }
    }
}

/// Tunable simulation constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub block_height: f32,
    /// Foundation width before the viewport cap
    pub starting_width: f32,
    /// Trimmed widths at or below this end the game
    pub min_block_width: f32,
    pub camera_activation_level: u32,
    pub camera_sign: CameraSign,
    pub overlap_noise_floor: f32,
    /// Time units per full oscillation of the moving block
    pub motion_period: f32,
    /// Delay between a placement and the next spawn
    pub spawn_delay: f32,
    pub scoring: ScoringPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            block_height: BLOCK_HEIGHT,
            starting_width: STARTING_WIDTH,
            min_block_width: MIN_BLOCK_WIDTH,
            camera_activation_level: CAMERA_ACTIVATION_LEVEL,
            camera_sign: CameraSign::Up,
            overlap_noise_floor: OVERLAP_NOISE_FLOOR,
            motion_period: MOTION_PERIOD,
            spawn_delay: SPAWN_DELAY,
            scoring: ScoringPolicy::Precision,
        }
    }
}

impl GameConfig {
    /// Defaults with a different scoring policy
    pub fn with_scoring(scoring: ScoringPolicy) -> Self {
        Self {
            scoring,
            ..Self::default()
        }
    }

    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("block_height", self.block_height)?;
        positive("starting_width", self.starting_width)?;
        positive("motion_period", self.motion_period)?;
        non_negative("min_block_width", self.min_block_width)?;
        non_negative("overlap_noise_floor", self.overlap_noise_floor)?;
        non_negative("spawn_delay", self.spawn_delay)?;
        if self.camera_activation_level == 0 {
            return Err(ConfigError::Invalid {
                field: "camera_activation_level",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be positive, got {value}"),
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be zero or more, got {value}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let c = GameConfig::default();
        assert_eq!(c.block_height, 40.0);
        assert_eq!(c.starting_width, 180.0);
        assert_eq!(c.min_block_width, 1.0);
        assert_eq!(c.camera_activation_level, 9);
        assert_eq!(c.overlap_noise_floor, 0.1);
        assert_eq!(c.motion_period, 4.0);
        assert_eq!(c.spawn_delay, 0.2);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let c = GameConfig::from_json(r#"{ "camera_activation_level": 12, "scoring": "Linear" }"#)
            .unwrap();
        assert_eq!(c.camera_activation_level, 12);
        assert_eq!(c.scoring, ScoringPolicy::Linear);
        assert_eq!(c.block_height, BLOCK_HEIGHT);
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "motion_period": 0.0 }"#),
            Err(ConfigError::Invalid { field: "motion_period", .. })
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "camera_activation_level": 0 }"#),
            Err(ConfigError::Invalid { field: "camera_activation_level", .. })
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let mut c = GameConfig::with_scoring(ScoringPolicy::Linear);
        c.camera_sign = CameraSign::Down;
        let back = GameConfig::from_json(&c.to_json().unwrap()).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(ScoringPolicy::from_str("LINEAR"), Some(ScoringPolicy::Linear));
        assert_eq!(ScoringPolicy::from_str("precision"), Some(ScoringPolicy::Precision));
        assert_eq!(ScoringPolicy::from_str("bogus"), None);
        assert_eq!(ScoringPolicy::Linear.as_str(), "Linear");
    }

    #[test]
    fn test_camera_sign() {
        assert_eq!(CameraSign::Up.apply(80.0), 80.0);
        assert_eq!(CameraSign::Down.apply(80.0), -80.0);
    }
}
