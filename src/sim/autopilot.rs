//! Demo/idle autopilot
//!
//! Plays the game for attract mode and soak runs. Taps when the airborne
//! block's center comes within a randomized tolerance of the block beneath it,
//! so it is good but not perfect. Same seed and same tick sequence give the
//! same game.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::GameState;

/// Seeded idle-mode player
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    /// Largest center error the autopilot will accept
    max_error: f32,
    /// Tolerance for the block currently airborne, rolled once per spawn
    tolerance: Option<(u32, f32)>,
}

impl Autopilot {
    pub fn new(seed: u64, max_error: f32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            max_error: max_error.max(0.0),
            tolerance: None,
        }
    }

    /// Whether to tap this tick
    pub fn wants_tap(&mut self, state: &GameState) -> bool {
        if state.is_game_over() {
            return false;
        }
        let (Some(moving), Some(support)) = (state.moving_block, state.placed_blocks.last())
        else {
            return false;
        };

        let tolerance = match self.tolerance {
            Some((level, tol)) if level == moving.level => tol,
            _ => {
                let tol = if self.max_error > 0.0 {
                    self.rng.random_range(0.0..self.max_error)
                } else {
                    0.0
                };
                self.tolerance = Some((moving.level, tol));
                tol
            }
        };

        // Never chase a tolerance tighter than one frame of motion can hit
        let reach = tolerance.max(moving.width * 0.05);
        (moving.x - support.x).abs() <= reach
    }
}
