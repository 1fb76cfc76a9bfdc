//! High-score persistence: a single integer in a dotfile.
//!
//! Both directions fail soft.  A missing or corrupt file loads as zero and
//! a failed save is logged, never surfaced to the player.

use std::path::{Path, PathBuf};

use log::warn;

pub fn default_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".snake_game_score")
}

pub fn load_high_score(path: &Path) -> u32 {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        // Missing file is the common first-run case; not worth a warning.
        Err(_) => return 0,
    };
    match text.trim().parse() {
        Ok(score) => score,
        Err(_) => {
            warn!("corrupt high-score file {}; starting from 0", path.display());
            0
        }
    }
}

/// Fire-and-forget write-through.
pub fn save_high_score(path: &Path, score: u32) {
    if let Err(err) = std::fs::write(path, score.to_string()) {
        warn!("failed to save high score to {}: {}", path.display(), err);
    }
}
