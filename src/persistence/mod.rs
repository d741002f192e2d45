//! Best-score persistence
//!
//! The simulation only ever reads and writes one integer. Where it lives is up
//! to the host:
//! - `MemoryStore`: in-process only
//! - `JsonFileStore`: versioned JSON file (native)
//! - `LocalStorageStore`: browser LocalStorage (wasm32)

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFileStore;
#[cfg(target_arch = "wasm32")]
pub use web::LocalStorageStore;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Current on-disk record version
pub const RECORD_VERSION: u32 = 1;

/// Somewhere a best score can be kept between sessions
pub trait BestScoreStore {
    /// Stored best score; 0 when nothing has been saved yet
    fn load(&mut self) -> Result<u64, StoreError>;
    fn save(&mut self, best_score: u64) -> Result<(), StoreError>;
}

/// Serialized form shared by the file and LocalStorage stores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScoreRecord {
    pub version: u32,
    pub best_score: u64,
}

impl BestScoreRecord {
    pub fn new(best_score: u64) -> Self {
        Self {
            version: RECORD_VERSION,
            best_score,
        }
    }

    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let record: BestScoreRecord = serde_json::from_str(json)?;
        if record.version > RECORD_VERSION {
            return Err(StoreError::Serde(format!(
                "record version {} is newer than {}",
                record.version, RECORD_VERSION
            )));
        }
        Ok(record)
    }
}

/// Keeps the best score for the life of the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    best_score: u64,
    saves: usize,
}

impl MemoryStore {
    pub fn new(best_score: u64) -> Self {
        Self {
            best_score,
            saves: 0,
        }
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl BestScoreStore for MemoryStore {
    fn load(&mut self) -> Result<u64, StoreError> {
        Ok(self.best_score)
    }

    fn save(&mut self, best_score: u64) -> Result<(), StoreError> {
        self.best_score = best_score;
        self.saves += 1;
        Ok(())
    }
}
