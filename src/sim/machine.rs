//! The game state machine
//!
//! Every external event goes through [`StackGame::handle`] one at a time and
//! runs to completion, game-over check included, before the next is accepted.
//! Idle -> Playing -> GameOver; only `reset` leaves GameOver.

use super::block::Block;
use super::camera::camera_offset;
use super::motion;
use super::scene::{Scene, Snapshot};
use super::score::{ScoreModel, scorer_for};
use super::state::{GameEvent, GamePhase, GameState, PendingSpawn};
use super::trim::trim;
use crate::check_viewport;
use crate::config::GameConfig;
use crate::consts::FOUNDATION_VIEWPORT_SHARE;
use crate::error::{ConfigError, SimError};

/// External events, in the order the host delivers them
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    Start { screen_width: f32 },
    Tick { dt: f32, screen_width: f32 },
    Tap,
    Reset,
}

/// Owns the game state and applies events to it
pub struct StackGame {
    config: GameConfig,
    scorer: Box<dyn ScoreModel>,
    state: GameState,
}

impl std::fmt::Debug for StackGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StackGame")
            .field("config", &self.config)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl StackGame {
    /// New unstarted game using the scorer named by `config`
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_best_score(config, 0)
    }

    /// New unstarted game seeded with a previously stored best score
    pub fn with_best_score(config: GameConfig, best_score: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let scorer = scorer_for(config.scoring);
        Ok(Self {
            config,
            scorer,
            state: GameState::new(best_score),
        })
    }

    /// Swap in a custom scoring strategy; only allowed before the game starts
    pub fn with_scorer(mut self, scorer: Box<dyn ScoreModel>) -> Self {
        if !self.state.is_started() {
            self.scorer = scorer;
        }
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_state(&self.state)
    }

    pub fn scene(&self) -> Scene {
        Scene::from_state(&self.state)
    }

    /// Apply one external event
    pub fn handle(&mut self, input: Input) -> Result<Vec<GameEvent>, SimError> {
        match input {
            Input::Start { screen_width } => self.start(screen_width),
            Input::Tick { dt, screen_width } => self.tick(dt, screen_width),
            Input::Tap => self.place(),
            Input::Reset => self.reset(),
        }
    }

    /// Lay the foundation and spawn the first block. No-op once started.
    pub fn start(&mut self, screen_width: f32) -> Result<Vec<GameEvent>, SimError> {
        let screen_width = self.checked_viewport(screen_width)?;
        if self.state.is_started() {
            return Ok(Vec::new());
        }

        let height = self.config.block_height;
        let width = self
            .config
            .starting_width
            .min(screen_width * FOUNDATION_VIEWPORT_SHARE);
        let foundation = Block::new(screen_width / 2.0, height, width, height, 0);

        let state = &mut self.state;
        state.placed_blocks.push(foundation);
        state.current_level = 1;
        state.current_block_width = width;
        state.camera_offset_y = camera_offset(state.current_level, &self.config);
        state.viewport_width = screen_width;
        state.phase = GamePhase::Playing;
        log::info!(
            "Game {} started: foundation width {width}, viewport {screen_width}",
            state.generation
        );

        let mut events = vec![GameEvent::Started {
            foundation_width: width,
        }];
        events.extend(self.spawn_next(screen_width)?);
        Ok(events)
    }

    /// Put a new moving block on top of the stack at the far edge
    ///
    /// No-op when the game is over, not started, or a block is already airborne.
    pub fn spawn_next(&mut self, screen_width: f32) -> Result<Vec<GameEvent>, SimError> {
        let screen_width = self.checked_viewport(screen_width)?;
        let state = &mut self.state;
        if state.phase != GamePhase::Playing || state.moving_block.is_some() {
            return Ok(Vec::new());
        }
        let Some(y) = state.stack_top() else {
            return Ok(Vec::new());
        };

        let width = state.current_block_width;
        let x = motion::spawn_position(width, screen_width);
        state.moving_block = Some(Block::new(
            x,
            y,
            width,
            self.config.block_height,
            state.current_level,
        ));
        state.pending_spawn = None;
        log::debug!("Spawned level {} (width {width})", state.current_level);

        Ok(vec![GameEvent::Spawned {
            level: state.current_level,
            width,
        }])
    }

    /// Advance the motion clock and any pending spawn by `dt`
    pub fn tick(&mut self, dt: f32, screen_width: f32) -> Result<Vec<GameEvent>, SimError> {
        let screen_width = self.checked_viewport(screen_width)?;
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        let state = &mut self.state;
        state.viewport_width = screen_width;
        state.phase_angle =
            motion::advance_phase(state.phase_angle, dt, self.config.motion_period);

        if state.is_game_over() {
            return Ok(Vec::new());
        }

        if let Some(block) = state.moving_block.as_mut() {
            block.x = motion::position(state.phase_angle, block.width, screen_width);
        }

        // A freshly spawned block keeps its placeholder until the next tick
        let Some(pending) = state.pending_spawn else {
            return Ok(Vec::new());
        };
        if pending.generation != state.generation {
            state.pending_spawn = None;
            return Ok(Vec::new());
        }
        let remaining = pending.remaining - dt;
        if remaining > 0.0 {
            state.pending_spawn = Some(PendingSpawn {
                remaining,
                ..pending
            });
            return Ok(Vec::new());
        }
        self.spawn_next(screen_width)
    }

    /// Drop the moving block onto the stack
    pub fn place(&mut self) -> Result<Vec<GameEvent>, SimError> {
        if self.state.is_game_over() {
            return Ok(Vec::new());
        }
        let Some(moving) = self.state.moving_block else {
            return Ok(Vec::new());
        };

        let trimmed = trim(
            &moving,
            &self.state.placed_blocks,
            self.state.viewport_width,
            self.config.overlap_noise_floor,
        )?;

        if trimmed.width <= self.config.min_block_width {
            return Ok(self.end_game(trimmed.width));
        }

        let state = &mut self.state;
        let new_level = state.current_level + 1;
        let points = match state.placed_blocks.last() {
            Some(previous) => self.scorer.score(&trimmed, previous, new_level),
            None => 0,
        };

        state.placed_blocks.push(trimmed);
        state.current_level = new_level;
        state.score += points;
        state.camera_offset_y = camera_offset(new_level, &self.config);
        state.current_block_width = trimmed.width;
        state.moving_block = None;
        state.pending_spawn = Some(PendingSpawn {
            generation: state.generation,
            remaining: self.config.spawn_delay,
        });
        log::debug!(
            "Placed level {} width {:.2} (+{points}, score {})",
            trimmed.level,
            trimmed.width,
            state.score
        );

        let mut events = vec![GameEvent::Placed {
            level: trimmed.level,
            width: trimmed.width,
            points,
        }];
        if state.update_best() {
            events.push(GameEvent::NewBest {
                best_score: state.best_score,
            });
        }
        Ok(events)
    }

    /// Throw away the current game and start a new one on the last known viewport
    ///
    /// Cancels any pending spawn. Before the first `start` there is no viewport
    /// to start on, so the fresh game stays idle.
    pub fn reset(&mut self) -> Result<Vec<GameEvent>, SimError> {
        let viewport = self.state.viewport_width;
        self.state = self.state.next_generation();
        log::info!(
            "Reset to game {} (best {})",
            self.state.generation,
            self.state.best_score
        );
        if check_viewport(viewport).is_ok() {
            self.start(viewport)
        } else {
            Ok(Vec::new())
        }
    }

    fn end_game(&mut self, surviving_width: f32) -> Vec<GameEvent> {
        let state = &mut self.state;
        state.phase = GamePhase::GameOver;
        state.moving_block = None;
        state.pending_spawn = None;
        log::info!(
            "Game over at level {} with score {} (overlap {surviving_width:.3})",
            state.current_level,
            state.score
        );

        let mut events = Vec::new();
        if state.update_best() {
            events.push(GameEvent::NewBest {
                best_score: state.best_score,
            });
        }
        events.push(GameEvent::GameOver {
            score: state.score,
            level: state.current_level,
        });
        events
    }

    fn checked_viewport(&self, screen_width: f32) -> Result<f32, SimError> {
        check_viewport(screen_width).inspect_err(|e| log::warn!("Rejected call: {e}"))
    }
}
