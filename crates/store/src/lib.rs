//! File-backed high-score store.
//!
//! The record file holds a single decimal integer and nothing else. Reading
//! and writing are best effort: a missing or malformed file reads as "no
//! record", and a failed write is logged and dropped so the game carries on.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, warn};

pub use brick_tetris_core as core;

use crate::core::HighScoreStore;

/// Default record file, relative to the working directory
pub const DEFAULT_RECORD_PATH: &str = "record.txt";

/// High score persisted to a plain text file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHighScore {
    path: PathBuf,
}

impl FileHighScore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the record file
    pub fn read(&self) -> Result<u32> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        parse_record(&text).with_context(|| format!("parsing {}", self.path.display()))
    }

    /// Overwrite the record file with `score`
    pub fn write(&self, score: u32) -> Result<()> {
        fs::write(&self.path, score.to_string())
            .with_context(|| format!("writing {}", self.path.display()))
    }
}

impl Default for FileHighScore {
    fn default() -> Self {
        Self::new(DEFAULT_RECORD_PATH)
    }
}

impl HighScoreStore for FileHighScore {
    fn load(&mut self) -> Option<u32> {
        match self.read() {
            Ok(score) => {
                debug!("loaded high score {} from {}", score, self.path.display());
                Some(score)
            }
            Err(err) => {
                debug!("no high score record: {:#}", err);
                None
            }
        }
    }

    fn save(&mut self, score: u32) {
        if let Err(err) = self.write(score) {
            warn!("high score not saved: {:#}", err);
        }
    }
}

/// Parse the record text: one non-negative decimal integer, surrounding
/// whitespace allowed.
pub fn parse_record(text: &str) -> Result<u32> {
    let trimmed = text.trim();
    trimmed
        .parse::<u32>()
        .with_context(|| format!("invalid record {:?}", trimmed))
}
