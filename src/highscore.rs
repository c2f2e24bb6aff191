//! Best-score persistence.
//!
//! A single JSON document `{"high_score": N}` in the working directory. A
//! missing or unreadable file counts as a best of 0; only writing can fail.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default file name, relative to the working directory.
pub const HIGH_SCORE_FILE: &str = "tetris_high_score.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
struct HighScoreDocument {
    #[serde(default)]
    high_score: u32,
}

/// The best score seen so far, bound to the file it lives in.
#[derive(Debug, Clone)]
pub struct HighScore {
    path: PathBuf,
    best: u32,
}

impl HighScore {
    /// Read the stored best score. Never fails: problems are logged and the
    /// best score starts at 0.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = match read_document(&path) {
            Ok(Some(doc)) => {
                log::info!("loaded high score {} from {}", doc.high_score, path.display());
                doc.high_score
            }
            Ok(None) => {
                log::info!("no high score file at {}, starting fresh", path.display());
                0
            }
            Err(err) => {
                log::warn!("ignoring unreadable high score file: {err:#}");
                0
            }
        };
        Self { path, best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a finished game's score.
    ///
    /// Returns `Ok(true)` when the score beat the stored best and was written.
    /// Scores that do not beat it leave the file untouched.
    pub fn submit(&mut self, score: u32) -> Result<bool> {
        if score <= self.best {
            return Ok(false);
        }
        let doc = HighScoreDocument { high_score: score };
        let json = serde_json::to_string(&doc).context("failed to encode high score")?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        self.best = score;
        log::info!("new high score {score}");
        Ok(true)
    }
}

fn read_document(path: &Path) -> Result<Option<HighScoreDocument>> {
    if !path.exists() {
        return Ok(None);
    }
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let doc = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(Some(doc))
}
