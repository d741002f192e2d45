//! Game state and core simulation types
//!
//! `GameState` is the only mutable data in the simulation. It is replaced
//! wholesale on reset; only the best score carries over.

use serde::{Deserialize, Serialize};

use super::block::Block;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No foundation yet
    Idle,
    /// Foundation placed; a block is airborne or about to spawn
    Playing,
    /// Run ended
    GameOver,
}

/// A spawn scheduled after a successful placement
///
/// Tagged with the generation of the game that scheduled it so that a spawn
/// outliving a reset never lands in the new game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingSpawn {
    pub generation: u64,
    /// Time left before the spawn fires
    pub remaining: f32,
}

/// Outcome notifications produced while handling an event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The foundation went down and the game began
    Started { foundation_width: f32 },
    /// A new moving block appeared
    Spawned { level: u32, width: f32 },
    /// A block landed; `width` is what survived trimming
    Placed { level: u32, width: f32, points: u64 },
    /// The session best went up
    NewBest { best_score: u64 },
    /// The run ended with this score
    GameOver { score: u64, level: u32 },
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Increments on every reset
    pub generation: u64,
    pub phase: GamePhase,
    /// Ordered by level; index 0 is the foundation
    pub placed_blocks: Vec<Block>,
    /// Present only while a block is airborne
    pub moving_block: Option<Block>,
    pub current_level: u32,
    /// Width the next spawned block gets
    pub current_block_width: f32,
    pub score: u64,
    pub best_score: u64,
    pub camera_offset_y: f32,
    /// Motion clock in [0, 2π)
    pub phase_angle: f32,
    pub pending_spawn: Option<PendingSpawn>,
    /// Most recent viewport width reported by the host
    pub viewport_width: f32,
}

impl GameState {
    /// A fresh, unstarted game
    pub fn new(best_score: u64) -> Self {
        Self {
            generation: 0,
            phase: GamePhase::Idle,
            placed_blocks: Vec::new(),
            moving_block: None,
            current_level: 0,
            current_block_width: 0.0,
            score: 0,
            best_score,
            camera_offset_y: 0.0,
            phase_angle: 0.0,
            pending_spawn: None,
            viewport_width: 0.0,
        }
    }

    /// Fresh state for the next session, keeping only the best score
    pub fn next_generation(&self) -> Self {
        Self {
            generation: self.generation + 1,
            ..Self::new(self.best_score.max(self.score))
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.phase != GamePhase::Idle
    }

    /// Top edge of the highest placed block
    pub fn stack_top(&self) -> Option<f32> {
        self.placed_blocks.last().map(|b| b.top())
    }

    /// Raise the best score if the current score beats it; returns true if it did
    pub fn update_best(&mut self) -> bool {
        if self.score > self.best_score {
            self.best_score = self.score;
            true
        } else {
            false
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        let s = GameState::new(42);
        assert_eq!(s.phase, GamePhase::Idle);
        assert_eq!(s.best_score, 42);
        assert_eq!(s.current_level, 0);
        assert!(s.placed_blocks.is_empty());
        assert!(s.moving_block.is_none());
        assert!(s.stack_top().is_none());
    }

    #[test]
    fn test_next_generation_keeps_only_best() {
        let mut s = GameState::new(10);
        s.score = 50;
        s.phase = GamePhase::GameOver;
        s.current_level = 4;
        s.phase_angle = 1.5;
        s.placed_blocks.push(Block::new(100.0, 40.0, 180.0, 40.0, 0));
        s.pending_spawn = Some(PendingSpawn {
            generation: 0,
            remaining: 0.1,
        });

        let next = s.next_generation();
        assert_eq!(next.generation, 1);
        assert_eq!(next.best_score, 50);
        assert_eq!(next.score, 0);
        assert_eq!(next.phase, GamePhase::Idle);
        assert_eq!(next.phase_angle, 0.0);
        assert!(next.placed_blocks.is_empty());
        assert!(next.pending_spawn.is_none());
    }

    #[test]
    fn test_update_best() {
        let mut s = GameState::new(30);
        s.score = 20;
        assert!(!s.update_best());
        assert_eq!(s.best_score, 30);
        s.score = 31;
        assert!(s.update_best());
        assert_eq!(s.best_score, 31);
    }
}
