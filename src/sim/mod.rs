//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters through `tick(dt, ..)`
//! - Seeded RNG only (autopilot)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod block;
pub mod camera;
pub mod machine;
pub mod motion;
pub mod scene;
pub mod score;
pub mod state;
pub mod trim;

pub use autopilot::Autopilot;
pub use block::Block;
pub use camera::{camera_offset, offset_magnitude};
pub use machine::{Input, StackGame};
pub use scene::{RectInstance, RectKind, Scene, SceneRect, Snapshot};
pub use score::{LinearScore, PrecisionScore, ScoreModel, scorer_for};
pub use state::{GameEvent, GamePhase, GameState, PendingSpawn};
pub use trim::{find_support, overlap_interval, trim};
