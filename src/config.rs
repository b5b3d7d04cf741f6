//! Runtime configuration for the terminal binary, read from the environment.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::store::DEFAULT_RECORD_PATH;
use crate::types::DEFAULT_FRAME_MS;

/// Host settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// High score record file
    pub record_path: PathBuf,
    /// Seed for piece selection
    pub seed: u32,
    /// Input poll / redraw interval
    pub frame_ms: u32,
    /// Log file; logging is off when unset
    pub log_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset or unparsable values fall
    /// back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let record_path = lookup("TETRIS_RECORD_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_RECORD_PATH.to_string())
            .into();

        let seed = lookup("TETRIS_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let frame_ms = lookup("TETRIS_FRAME_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(DEFAULT_FRAME_MS)
            .max(1);

        let log_path = lookup("TETRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s.into()) });

        Self {
            record_path,
            seed,
            frame_ms,
            log_path,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32 ^ d.subsec_nanos())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config.record_path, PathBuf::from("record.txt"));
        assert_eq!(config.frame_ms, 50);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn test_explicit_values() {
        let config = Config::from_lookup(lookup(&[
            ("TETRIS_RECORD_PATH", "/tmp/hs.txt"),
            ("TETRIS_SEED", "42"),
            ("TETRIS_FRAME_MS", "16"),
            ("TETRIS_LOG_PATH", "game.log"),
        ]));
        assert_eq!(config.record_path, PathBuf::from("/tmp/hs.txt"));
        assert_eq!(config.seed, 42);
        assert_eq!(config.frame_ms, 16);
        assert_eq!(config.log_path, Some(PathBuf::from("game.log")));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = Config::from_lookup(lookup(&[
            ("TETRIS_FRAME_MS", "fast"),
            ("TETRIS_LOG_PATH", "   "),
            ("TETRIS_RECORD_PATH", ""),
        ]));
        assert_eq!(config.frame_ms, 50);
        assert_eq!(config.log_path, None);
        assert_eq!(config.record_path, PathBuf::from("record.txt"));
    }

    #[test]
    fn test_frame_ms_minimum() {
        let config = Config::from_lookup(lookup(&[("TETRIS_FRAME_MS", "0")]));
        assert_eq!(config.frame_ms, 1);
    }
}
