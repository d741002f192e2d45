//! A game wired to a best-score store
//!
//! The store is read once when the session is built and written only after a
//! run ends with a score above what was stored.

use crate::config::GameConfig;
use crate::error::{ConfigError, SimError, StoreError};
use crate::persistence::BestScoreStore;
use crate::sim::{GameEvent, Input, Scene, Snapshot, StackGame};

pub struct Session<S: BestScoreStore> {
    game: StackGame,
    store: S,
    /// Best score the store is known to hold
    stored_best: u64,
    last_save_error: Option<StoreError>,
}

impl<S: BestScoreStore> Session<S> {
    /// Build a game seeded with the stored best score
    ///
    /// A store that cannot be read is treated as empty.
    pub fn new(config: GameConfig, mut store: S) -> Result<Self, ConfigError> {
        let stored_best = store.load().unwrap_or_else(|e| {
            log::warn!("Could not load best score, starting from 0: {e}");
            0
        });
        let game = StackGame::with_best_score(config, stored_best)?;
        Ok(Self {
            game,
            store,
            stored_best,
            last_save_error: None,
        })
    }

    pub fn game(&self) -> &StackGame {
        &self.game
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn snapshot(&self) -> Snapshot {
        self.game.snapshot()
    }

    pub fn scene(&self) -> Scene {
        self.game.scene()
    }

    /// Most recent failed save, if the last attempt failed
    pub fn last_save_error(&self) -> Option<&StoreError> {
        self.last_save_error.as_ref()
    }

    pub fn start(&mut self, screen_width: f32) -> Result<Vec<GameEvent>, SimError> {
        self.handle(Input::Start { screen_width })
    }

    pub fn tick(&mut self, dt: f32, screen_width: f32) -> Result<Vec<GameEvent>, SimError> {
        self.handle(Input::Tick { dt, screen_width })
    }

    pub fn place(&mut self) -> Result<Vec<GameEvent>, SimError> {
        self.handle(Input::Tap)
    }

    pub fn reset(&mut self) -> Result<Vec<GameEvent>, SimError> {
        self.handle(Input::Reset)
    }

    /// Forward an event to the game, persisting the best score on game over
    pub fn handle(&mut self, input: Input) -> Result<Vec<GameEvent>, SimError> {
        let events = self.game.handle(input)?;
        if events
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver { .. }))
        {
            self.persist_best();
        }
        Ok(events)
    }

    fn persist_best(&mut self) {
        let best = self.game.state().best_score;
        if best <= self.stored_best {
            return;
        }
        match self.store.save(best) {
            Ok(()) => {
                self.stored_best = best;
                self.last_save_error = None;
            }
            Err(e) => {
                log::warn!("Failed to save best score {best}: {e}");
                self.last_save_error = Some(e);
            }
        }
    }
}
