//! Durable high score storage
//!
//! - `LocalStorageStore`: browser LocalStorage, value stored as a decimal string
//! - `FileStore`: native JSON file
//!
//! Reads never fail: missing or corrupt data counts as a high score of 0.
//! Writes are fire-and-forget; failures are logged and otherwise ignored.

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

/// Parse a stored high score written as a plain integer
pub fn parse_high_score(raw: &str) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(score) => score,
        Err(e) => {
            log::warn!("Ignoring unreadable high score {:?}: {}", raw, e);
            0
        }
    }
}
