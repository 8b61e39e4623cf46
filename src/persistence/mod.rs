//! High-score persistence
//!
//! The only persisted value is a single high-score integer. Backends:
//! - `MemoryStore`: in-process, for tests and headless runs
//! - `FileStore`: JSON number in a file (native)
//! - `LocalStorageStore`: browser LocalStorage (wasm32)

use std::fmt;

mod file;
#[cfg(target_arch = "wasm32")]
mod local_storage;

pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

/// Why a store could not be read or written
#[derive(Debug)]
pub enum StorageError {
    /// Backend not reachable (no window, storage disabled, quota)
    Unavailable(String),
    Io(std::io::Error),
    /// Stored value exists but is not a non-negative integer
    Corrupt(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(why) => write!(f, "storage unavailable: {why}"),
            Self::Io(e) => write!(f, "storage I/O error: {e}"),
            Self::Corrupt(raw) => write!(f, "stored high score is corrupt: {raw:?}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Backend for the persisted high score
pub trait HighScoreStore {
    /// `Ok(None)` when nothing has been stored yet
    fn load(&self) -> Result<Option<u64>, StorageError>;

    fn save(&mut self, score: u64) -> Result<(), StorageError>;
}

/// Parse a stored high-score string
pub(crate) fn parse_score(raw: &str) -> Result<u64, StorageError> {
    serde_json::from_str::<u64>(raw.trim()).map_err(|_| StorageError::Corrupt(raw.to_string()))
}

/// Keeps the high score in memory only
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(score: u64) -> Self {
        Self { value: Some(score) }
    }

    pub fn value(&self) -> Option<u64> {
        self.value
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<Option<u64>, StorageError> {
        Ok(self.value)
    }

    fn save(&mut self, score: u64) -> Result<(), StorageError> {
        self.value = Some(score);
        Ok(())
    }
}
