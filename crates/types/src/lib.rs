//! Core types shared across the engine and session crates.
//!
//! Pure data types and constants only; no game logic lives here.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Board dimensions. Fixed for the lifetime of a session.
pub const BOARD_ROWS: usize = 18;
pub const BOARD_COLS: usize = 10;

/// Fixed tick cadence for the session loop (milliseconds).
pub const TICK_MS: u64 = 800;

/// Points awarded per simultaneous line clear, indexed by clear count.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// The seven tetromino shapes. The variant doubles as the identity/color
/// tag stored in filled board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl Shape {
    pub const ALL: [Shape; 7] = [
        Shape::I,
        Shape::J,
        Shape::L,
        Shape::O,
        Shape::S,
        Shape::T,
        Shape::Z,
    ];

    /// Parse shape from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(Shape::I),
            "j" => Some(Shape::J),
            "l" => Some(Shape::L),
            "o" => Some(Shape::O),
            "s" => Some(Shape::S),
            "t" => Some(Shape::T),
            "z" => Some(Shape::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::I => "i",
            Shape::J => "j",
            Shape::L => "l",
            Shape::O => "o",
            Shape::S => "s",
            Shape::T => "t",
            Shape::Z => "z",
        }
    }
}

/// Cell on the board (None = empty, Some = filled with a shape identity)
pub type Cell = Option<Shape>;

/// Commands accepted by the session. The transport layer maps button or
/// reaction events onto these; commands outside the current state are no-ops
/// except `Start` while Playing, which is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    RotateClockwise,
    MoveLeft,
    MoveRight,
    SetSoftDrop(bool),
}

impl Command {
    /// Parse command from string (for the transport layer)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(Command::Start),
            "stop" => Some(Command::Stop),
            "rotate" | "rotatecw" => Some(Command::RotateClockwise),
            "left" | "moveleft" => Some(Command::MoveLeft),
            "right" | "moveright" => Some(Command::MoveRight),
            "softdropon" => Some(Command::SetSoftDrop(true)),
            "softdropoff" => Some(Command::SetSoftDrop(false)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Stop => "stop",
            Command::RotateClockwise => "rotateCw",
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SetSoftDrop(true) => "softDropOn",
            Command::SetSoftDrop(false) => "softDropOff",
        }
    }
}

/// Session lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Idle,
    Playing,
    GameOver,
}

/// Per-session configuration, passed in at construction.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Inter-tick wait. A tick that spawned a piece skips the wait.
    pub tick_interval: Duration,
    /// Seed for the shape RNG.
    pub seed: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(TICK_MS),
            seed: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_string_roundtrip() {
        for shape in Shape::ALL {
            assert_eq!(Shape::from_str(shape.as_str()), Some(shape));
        }
        assert_eq!(Shape::from_str("T"), Some(Shape::T));
        assert_eq!(Shape::from_str("x"), None);
    }

    #[test]
    fn test_command_parsing() {
        assert_eq!(Command::from_str("start"), Some(Command::Start));
        assert_eq!(Command::from_str("rotateCw"), Some(Command::RotateClockwise));
        assert_eq!(Command::from_str("LEFT"), Some(Command::MoveLeft));
        assert_eq!(
            Command::from_str("softdropon"),
            Some(Command::SetSoftDrop(true))
        );
        assert_eq!(Command::from_str("bogus"), None);
    }

    #[test]
    fn test_line_scores_table() {
        assert_eq!(LINE_SCORES[0], 0);
        assert_eq!(LINE_SCORES[1], 100);
        assert_eq!(LINE_SCORES[2], 300);
        assert_eq!(LINE_SCORES[3], 500);
        assert_eq!(LINE_SCORES[4], 800);
    }

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.tick_interval, Duration::from_millis(TICK_MS));
    }
}
