//! JSON file-backed high score (native only)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::parse_high_score;
use crate::highscore::HighScoreStore;

/// Default file name, relative to the working directory
pub const DEFAULT_FILE: &str = "brickfall_highscore.json";

/// On-disk layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct HighScoreRecord {
    #[serde(default)]
    high_score: u32,
}

/// High score kept in a small JSON file, cached in memory after open
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    cached: u32,
}

impl FileStore {
    /// Open (or lazily create) the store at `path`
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cached = Self::read(&path);
        Self { path, cached }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(path: &Path) -> u32 {
        if !path.exists() {
            log::info!("No high score file at {:?}, starting fresh", path);
            return 0;
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<HighScoreRecord>(&contents) {
                Ok(record) => {
                    log::info!("Loaded high score {} from {:?}", record.high_score, path);
                    record.high_score
                }
                // Older files held just the number
                Err(_) => parse_high_score(&contents),
            },
            Err(e) => {
                log::warn!("Failed to read high score file {:?}: {}", path, e);
                0
            }
        }
    }

    fn write(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let record = HighScoreRecord {
            high_score: self.cached,
        };
        let json = serde_json::to_string_pretty(&record)?;
        std::fs::write(&self.path, json)
    }
}

impl HighScoreStore for FileStore {
    fn get(&self) -> u32 {
        self.cached
    }

    fn set(&mut self, score: u32) {
        self.cached = score;
        match self.write() {
            Ok(()) => log::info!("High score saved to {:?}", self.path),
            Err(e) => log::warn!("Failed to save high score to {:?}: {}", self.path, e),
        }
    }
}
