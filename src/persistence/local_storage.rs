//! Browser LocalStorage high-score store

use super::{HighScoreStore, StorageError, parse_score};

/// Key shared with earlier builds so existing records carry over
pub const STORAGE_KEY: &str = "brickBreaker_highScore";

#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| StorageError::Unavailable("LocalStorage not accessible".into()))
    }
}

impl HighScoreStore for LocalStorageStore {
    fn load(&self) -> Result<Option<u64>, StorageError> {
        let storage = Self::storage()?;
        match storage.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => parse_score(&raw).map(Some),
            Ok(None) => Ok(None),
            Err(e) => Err(StorageError::Unavailable(format!("{e:?}"))),
        }
    }

    fn save(&mut self, score: u64) -> Result<(), StorageError> {
        let storage = Self::storage()?;
        storage
            .set_item(STORAGE_KEY, &score.to_string())
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }
}
