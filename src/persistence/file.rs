//! JSON file store (native)

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{BestScoreRecord, BestScoreStore};
use crate::error::StoreError;

/// Best score kept in a small JSON file
///
/// Writes go to a `.tmp` sibling first and are renamed into place, so a crash
/// mid-write leaves the previous record intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

impl BestScoreStore for JsonFileStore {
    fn load(&mut self) -> Result<u64, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(json) => {
                let record = BestScoreRecord::from_json(&json)?;
                log::info!(
                    "Loaded best score {} from {}",
                    record.best_score,
                    self.path.display()
                );
                Ok(record.best_score)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No best score at {}, starting fresh", self.path.display());
                Ok(0)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, best_score: u64) -> Result<(), StoreError> {
        let json = BestScoreRecord::new(best_score).to_json()?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.tmp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        log::info!("Best score {best_score} saved to {}", self.path.display());
        Ok(())
    }
}
