//! Game tuning and preferences
//!
//! Persisted separately from the high score in LocalStorage (web) or read
//! from a JSON file named by `BRICKFALL_SETTINGS` (native).

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay tuning. Defaults reproduce the classic layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Brick grid ===
    pub brick_rows: u32,
    pub brick_columns: u32,
    pub brick_height: f32,
    /// Spacing between neighbouring bricks (both axes)
    pub brick_gap: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Pixels per tick while a direction is held
    pub paddle_speed: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Per-axis speed in pixels per tick
    pub ball_speed: f32,

    /// Demo mode: the paddle follows the ball on its own
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            brick_rows: BRICK_ROWS,
            brick_columns: BRICK_COLUMNS,
            brick_height: BRICK_HEIGHT,
            brick_gap: BRICK_GAP,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,

            autopilot: false,
        }
    }
}

/// Clamp a float into range, falling back to `default` for NaN/infinity
fn clamp_or(value: f32, min: f32, max: f32, default: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        default
    }
}

impl Settings {
    /// Total number of bricks in the grid
    pub fn brick_count(&self) -> u32 {
        self.brick_rows * self.brick_columns
    }

    /// Return a copy with every value forced into a playable range
    pub fn validated(&self) -> Self {
        let defaults = Self::default();
        Self {
            brick_rows: self.brick_rows.clamp(1, 20),
            brick_columns: self.brick_columns.clamp(1, 32),
            brick_height: clamp_or(self.brick_height, 4.0, 60.0, defaults.brick_height),
            brick_gap: clamp_or(self.brick_gap, 0.0, 8.0, defaults.brick_gap),
            paddle_width: clamp_or(self.paddle_width, 10.0, 300.0, defaults.paddle_width),
            paddle_height: clamp_or(self.paddle_height, 4.0, 40.0, defaults.paddle_height),
            paddle_speed: clamp_or(self.paddle_speed, 0.5, 30.0, defaults.paddle_speed),
            ball_radius: clamp_or(self.ball_radius, 2.0, 30.0, defaults.ball_radius),
            ball_speed: clamp_or(self.ball_speed, 0.5, 20.0, defaults.ball_speed),
            autopilot: self.autopilot,
        }
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Settings>(json).map(|s| s.validated())
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "brickfall_settings";

    /// Environment variable naming a JSON settings file (native only)
    #[allow(dead_code)]
    const ENV_PATH: &'static str = "BRICKFALL_SETTINGS";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring malformed settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                if storage.set_item(Self::STORAGE_KEY, &json).is_err() {
                    log::warn!("Failed to save settings");
                } else {
                    log::info!("Settings saved");
                }
            }
        }
    }

    /// Load settings from the file named by `BRICKFALL_SETTINGS`, if any
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(Self::ENV_PATH) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    log::warn!("Malformed settings file {:?}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Failed to read settings file {:?}: {}. Using defaults.", path, e);
                Self::default()
            }
        }
    }
}
