//! Camera tracking
//!
//! The view holds still for the first few levels, then rises one block height
//! per level so the top of the tower stays in frame.

use crate::config::GameConfig;

/// Unsigned camera shift for `level`
#[inline]
pub fn offset_magnitude(level: u32, activation_level: u32, block_height: f32) -> f32 {
    if level >= activation_level {
        let levels_past = level - activation_level.saturating_sub(1);
        levels_past as f32 * block_height
    } else {
        0.0
    }
}

/// Camera shift for `level`, signed for the configured renderer convention
pub fn camera_offset(level: u32, config: &GameConfig) -> f32 {
    config.camera_sign.apply(offset_magnitude(
        level,
        config.camera_activation_level,
        config.block_height,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CameraSign;

    #[test]
    fn test_activation_at_nine() {
        assert_eq!(offset_magnitude(0, 9, 40.0), 0.0);
        assert_eq!(offset_magnitude(8, 9, 40.0), 0.0);
        assert_eq!(offset_magnitude(9, 9, 40.0), 40.0);
        assert_eq!(offset_magnitude(10, 9, 40.0), 80.0);
    }

    #[test]
    fn test_activation_at_twelve() {
        assert_eq!(offset_magnitude(11, 12, 40.0), 0.0);
        assert_eq!(offset_magnitude(12, 12, 40.0), 40.0);
        assert_eq!(offset_magnitude(20, 12, 40.0), 360.0);
    }

    #[test]
    fn test_signed_offset() {
        let mut config = GameConfig::default();
        assert_eq!(camera_offset(10, &config), 80.0);
        config.camera_sign = CameraSign::Down;
        assert_eq!(camera_offset(10, &config), -80.0);
        assert_eq!(camera_offset(3, &config), 0.0);
    }
}
