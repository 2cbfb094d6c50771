//! Platform abstraction layer
//!
//! Maps physical keys to the simulation's logical input so browser and
//! native frontends share one binding table.

use crate::sim::InputEvent;

/// Frontend-level command triggered by a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Paddle input for the simulation
    Paddle(InputEvent),
    /// Start a new round (only honoured on the end screen)
    Reset,
    /// Toggle demo mode
    ToggleAutopilot,
}

/// Translate a `KeyboardEvent.key` value into a command
pub fn key_to_command(key: &str, pressed: bool) -> Option<Command> {
    let event = match (key, pressed) {
        ("ArrowLeft" | "a" | "A", true) => InputEvent::LeftPressed,
        ("ArrowLeft" | "a" | "A", false) => InputEvent::LeftReleased,
        ("ArrowRight" | "d" | "D", true) => InputEvent::RightPressed,
        ("ArrowRight" | "d" | "D", false) => InputEvent::RightReleased,
        ("Enter" | "r" | "R", true) => return Some(Command::Reset),
        ("i" | "I", true) => return Some(Command::ToggleAutopilot),
        _ => return None,
    };
    Some(Command::Paddle(event))
}
