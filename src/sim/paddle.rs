//! Keyboard-driven paddle direction
//!
//! The controller tracks which direction keys are held. Holding only one
//! moves the paddle that way; holding both (or neither) stops it, whatever
//! order the presses arrived in.

use serde::{Deserialize, Serialize};

/// Logical paddle input, already decoupled from physical keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    LeftPressed,
    LeftReleased,
    RightPressed,
    RightReleased,
}

/// Direction the paddle is currently being driven
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaddleDirection {
    #[default]
    Idle,
    MovingLeft,
    MovingRight,
}

impl PaddleDirection {
    /// Signed unit multiplier for the paddle speed
    pub fn sign(self) -> f32 {
        match self {
            PaddleDirection::Idle => 0.0,
            PaddleDirection::MovingLeft => -1.0,
            PaddleDirection::MovingRight => 1.0,
        }
    }
}

/// Held-key state machine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaddleController {
    left_held: bool,
    right_held: bool,
}

impl PaddleController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one input event. Repeated presses (key auto-repeat) are idempotent.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::LeftPressed => self.left_held = true,
            InputEvent::LeftReleased => self.left_held = false,
            InputEvent::RightPressed => self.right_held = true,
            InputEvent::RightReleased => self.right_held = false,
        }
    }

    pub fn direction(&self) -> PaddleDirection {
        match (self.left_held, self.right_held) {
            (true, false) => PaddleDirection::MovingLeft,
            (false, true) => PaddleDirection::MovingRight,
            _ => PaddleDirection::Idle,
        }
    }

    /// Paddle velocity for the given speed
    pub fn velocity(&self, speed: f32) -> f32 {
        self.direction().sign() * speed
    }
}
