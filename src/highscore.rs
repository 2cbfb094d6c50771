//! High score capability
//!
//! The simulation only ever sees a [`HighScoreStore`]; where the value
//! actually lives (LocalStorage, a JSON file, memory) is the frontend's call.

/// Logical key the high score is stored under
pub const HIGH_SCORE_KEY: &str = "brickfall_high_score";

/// Durable storage for a single high score value
pub trait HighScoreStore {
    /// Current persisted high score (0 if none)
    fn get(&self) -> u32;

    /// Overwrite the persisted high score. Fire-and-forget.
    fn set(&mut self, score: u32);
}

/// Persist `score` if it beats the stored high score.
///
/// Returns true when the stored value was replaced.
pub fn record_if_high_score(store: &mut impl HighScoreStore, score: u32) -> bool {
    let previous = store.get();
    if score > previous {
        store.set(score);
        log::info!("New high score: {} (previous {})", score, previous);
        true
    } else {
        false
    }
}

/// In-memory store for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: u32,
    /// Number of writes performed
    pub writes: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: u32) -> Self {
        Self { value, writes: 0 }
    }
}

impl HighScoreStore for MemoryStore {
    fn get(&self) -> u32 {
        self.value
    }

    fn set(&mut self, score: u32) {
        self.value = score;
        self.writes += 1;
    }
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for Box<S> {
    fn get(&self) -> u32 {
        (**self).get()
    }

    fn set(&mut self, score: u32) {
        (**self).set(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_only_when_strictly_greater() {
        let mut store = MemoryStore::with_value(10);

        assert!(!record_if_high_score(&mut store, 5));
        assert!(!record_if_high_score(&mut store, 10));
        assert_eq!(store.get(), 10);
        assert_eq!(store.writes, 0);

        assert!(record_if_high_score(&mut store, 11));
        assert_eq!(store.get(), 11);
        assert_eq!(store.writes, 1);
    }

    #[test]
    fn test_zero_never_recorded_on_empty_store() {
        let mut store = MemoryStore::new();
        assert!(!record_if_high_score(&mut store, 0));
        assert_eq!(store.writes, 0);
    }

    #[test]
    fn test_boxed_store() {
        let mut store: Box<dyn HighScoreStore> = Box::new(MemoryStore::with_value(3));
        assert!(record_if_high_score(&mut store, 4));
        assert_eq!(store.get(), 4);
    }
}
