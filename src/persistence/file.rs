//! File-backed high-score store
//!
//! Writes go to a sibling `.tmp` file first and are renamed into place, so a
//! crash mid-write leaves the previous value intact.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{HighScoreStore, StorageError, parse_score};

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "highscore".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl HighScoreStore for FileStore {
    fn load(&self) -> Result<Option<u64>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => parse_score(&raw).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, score: u64) -> Result<(), StorageError> {
        let json = serde_json::to_string(&score)
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.tmp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        log::debug!("High score {} written to {}", score, self.path.display());
        Ok(())
    }
}
