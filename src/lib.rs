//! Brickfall - A Breakout/Arkanoid arcade game
//!
//! Core modules:
//! - `sim`: Headless simulation (collisions, paddle control, game phase)
//! - `highscore`: High score capability and the record-if-greater rule
//! - `persistence`: Durable high score stores (LocalStorage on web, JSON file natively)
//! - `renderer`: Frame building and WebGPU rendering pipeline
//! - `platform`: Keyboard mapping for browser/native frontends
//! - `settings`: Data-driven game tuning

pub mod highscore;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use highscore::{HighScoreStore, MemoryStore, record_if_high_score};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, velocities are expressed per tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Smallest playable arena; smaller viewports are clamped up
    pub const MIN_ARENA_WIDTH: f32 = 320.0;
    pub const MIN_ARENA_HEIGHT: f32 = 240.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Paddle speed in pixels per tick while a direction is held
    pub const PADDLE_SPEED: f32 = 5.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Horizontal/vertical speed magnitude in pixels per tick
    pub const BALL_SPEED: f32 = 4.0;
    /// Gap between the paddle top and the bottom of the ball at serve
    pub const BALL_START_CLEARANCE: f32 = 30.0;

    /// Brick grid defaults
    pub const BRICK_ROWS: u32 = 5;
    pub const BRICK_COLUMNS: u32 = 8;
    pub const BRICK_HEIGHT: f32 = 30.0;
    pub const BRICK_GAP: f32 = 5.0;
}
