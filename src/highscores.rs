//! High score load/save policy
//!
//! Reads never fail: a missing, corrupt or unreachable record is a high
//! score of 0. Writes are best-effort and only logged on failure.

use crate::persistence::HighScoreStore;

/// Stored high score, or 0 when there is none usable
pub fn load_high_score(store: &dyn HighScoreStore) -> u64 {
    match store.load() {
        Ok(Some(score)) => {
            log::info!("Loaded high score {}", score);
            score
        }
        Ok(None) => {
            log::info!("No high score found, starting fresh");
            0
        }
        Err(e) => {
            log::warn!("Ignoring stored high score: {}", e);
            0
        }
    }
}

/// Persist a new high score. Returns whether the write went through.
pub fn record_high_score(store: &mut dyn HighScoreStore, score: u64) -> bool {
    match store.save(score) {
        Ok(()) => {
            log::info!("High score saved ({})", score);
            true
        }
        Err(e) => {
            log::warn!("High score {} not saved: {}", score, e);
            false
        }
    }
}
