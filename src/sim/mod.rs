//! Headless simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One call to `tick` per frame, velocities in pixels per tick
//! - Row-major brick scan, stable indices
//! - No rendering or platform dependencies (storage is injected)

pub mod arena;
pub mod autopilot;
pub mod bricks;
pub mod collision;
pub mod paddle;
pub mod state;
pub mod tick;

pub use arena::{Arena, Rect};
pub use bricks::{Brick, BrickGrid};
pub use collision::{FloorResult, WallResult, ball_brick_collisions, ball_floor_collision, ball_wall_collision};
pub use paddle::{InputEvent, PaddleController, PaddleDirection};
pub use state::{Ball, GamePhase, GameWorld, Paddle};
pub use tick::{GameEvent, TickInput, tick};
