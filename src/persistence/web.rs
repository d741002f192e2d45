//! Browser LocalStorage store (wasm32)

use super::{BestScoreRecord, BestScoreStore};
use crate::error::StoreError;

/// Best score kept under a fixed LocalStorage key
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    const STORAGE_KEY: &'static str = "stack_tower_best_score";

    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StoreError::Unavailable)
    }
}

impl BestScoreStore for LocalStorageStore {
    fn load(&mut self) -> Result<u64, StoreError> {
        let storage = Self::storage()?;
        match storage.get_item(Self::STORAGE_KEY) {
            Ok(Some(json)) => {
                let record = BestScoreRecord::from_json(&json)?;
                log::info!("Loaded best score {}", record.best_score);
                Ok(record.best_score)
            }
            Ok(None) => {
                log::info!("No best score found, starting fresh");
                Ok(0)
            }
            Err(_) => Err(StoreError::Io("LocalStorage read failed".into())),
        }
    }

    fn save(&mut self, best_score: u64) -> Result<(), StoreError> {
        let storage = Self::storage()?;
        let json = BestScoreRecord::new(best_score).to_json()?;
        storage
            .set_item(Self::STORAGE_KEY, &json)
            .map_err(|_| StoreError::Io("LocalStorage write failed".into()))?;
        log::info!("Best score {best_score} saved");
        Ok(())
    }
}
