//! Scoring strategies
//!
//! Selected once per game through [`ScoringPolicy`]; the state machine only
//! sees the [`ScoreModel`] trait.

use super::block::Block;
use crate::config::ScoringPolicy;
use crate::consts::{SCORE_BASE, SCORE_PRECISION_BONUS};

/// Points awarded for a successful placement
pub trait ScoreModel {
    /// `trimmed` just landed on `previous`, bringing the tower to `new_level`
    fn score(&self, trimmed: &Block, previous: &Block, new_level: u32) -> u64;
}

/// Base points plus a bonus for how much of the previous block was covered,
/// multiplied by the level reached
#[derive(Debug, Clone, Copy)]
pub struct PrecisionScore {
    pub base: u64,
    pub max_bonus: f32,
}

impl Default for PrecisionScore {
    fn default() -> Self {
        Self {
            base: SCORE_BASE,
            max_bonus: SCORE_PRECISION_BONUS,
        }
    }
}

impl ScoreModel for PrecisionScore {
    fn score(&self, trimmed: &Block, previous: &Block, new_level: u32) -> u64 {
        if previous.width <= 0.0 {
            return 0;
        }
        let ratio = (trimmed.width / previous.width).clamp(0.0, 1.0);
        let bonus = (ratio * self.max_bonus).round() as u64;
        (self.base + bonus) * new_level as u64
    }
}

/// One point per block stacked above the foundation
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearScore;

impl ScoreModel for LinearScore {
    fn score(&self, _trimmed: &Block, _previous: &Block, new_level: u32) -> u64 {
        new_level.saturating_sub(1) as u64
    }
}

/// Build the scorer for a policy
pub fn scorer_for(policy: ScoringPolicy) -> Box<dyn ScoreModel> {
    match policy {
        ScoringPolicy::Precision => Box::new(PrecisionScore::default()),
        ScoringPolicy::Linear => Box::new(LinearScore),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(width: f32) -> Block {
        Block::new(100.0, 80.0, width, 40.0, 1)
    }

    #[test]
    fn test_precision_perfect() {
        let s = PrecisionScore::default();
        assert_eq!(s.score(&block(180.0), &block(180.0), 2), 120);
    }

    #[test]
    fn test_precision_partial() {
        let s = PrecisionScore::default();
        // 140/180 * 50 = 38.9 -> 39; (10 + 39) * 2
        assert_eq!(s.score(&block(140.0), &block(180.0), 2), 98);
        // half overlap at level 5: (10 + 25) * 5
        assert_eq!(s.score(&block(50.0), &block(100.0), 5), 175);
    }

    #[test]
    fn test_precision_degenerate_previous() {
        let s = PrecisionScore::default();
        assert_eq!(s.score(&block(10.0), &block(0.0), 3), 0);
    }

    #[test]
    fn test_linear() {
        let s = LinearScore;
        assert_eq!(s.score(&block(1.0), &block(180.0), 1), 0);
        assert_eq!(s.score(&block(1.0), &block(180.0), 2), 1);
        assert_eq!(s.score(&block(180.0), &block(180.0), 7), 6);
        assert_eq!(s.score(&block(180.0), &block(180.0), 0), 0);
    }

    #[test]
    fn test_scorer_for_policy() {
        let prev = block(100.0);
        let cur = block(100.0);
        assert_eq!(scorer_for(ScoringPolicy::Precision).score(&cur, &prev, 2), 120);
        assert_eq!(scorer_for(ScoringPolicy::Linear).score(&cur, &prev, 2), 1);
    }
}
