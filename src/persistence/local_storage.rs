//! LocalStorage-backed high score (WASM only)

use crate::highscore::{HIGH_SCORE_KEY, HighScoreStore};

use super::parse_high_score;

/// High score kept in the browser's LocalStorage under [`HIGH_SCORE_KEY`]
#[derive(Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

impl HighScoreStore for LocalStorageStore {
    fn get(&self) -> u32 {
        Self::storage()
            .and_then(|s| s.get_item(HIGH_SCORE_KEY).ok().flatten())
            .map(|raw| parse_high_score(&raw))
            .unwrap_or(0)
    }

    fn set(&mut self, score: u32) {
        match Self::storage() {
            Some(storage) => {
                if storage
                    .set_item(HIGH_SCORE_KEY, &score.to_string())
                    .is_err()
                {
                    log::warn!("Failed to save high score");
                } else {
                    log::info!("High score saved ({})", score);
                }
            }
            None => log::warn!("LocalStorage unavailable, high score not saved"),
        }
    }
}
