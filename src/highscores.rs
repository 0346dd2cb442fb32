//! Single-scalar high score persistence
//!
//! One integer, newline-terminated decimal text. Missing or corrupt files
//! read back as zero; persistence failures are logged and swallowed, never
//! surfaced to the player.

use std::fs;
use std::path::{Path, PathBuf};

/// File-backed best score
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
    best: u32,
}

impl HighScoreStore {
    /// Read the stored best from `path`. Missing or unparsable content is
    /// recovered as zero.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let best = match fs::read_to_string(&path) {
            Ok(text) => match text.trim().parse::<u32>() {
                Ok(score) => score,
                Err(err) => {
                    log::warn!("corrupt high score file {}: {err}", path.display());
                    0
                }
            },
            Err(_) => {
                log::info!("no high score file at {}, starting at 0", path.display());
                0
            }
        };
        Self { path, best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Persist `score` if it beats the stored best. Returns true when a new
    /// best was written.
    pub fn record(&mut self, score: u32) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        if let Err(err) = fs::write(&self.path, format!("{score}\n")) {
            log::warn!("failed to save high score to {}: {err}", self.path.display());
        }
        true
    }
}
