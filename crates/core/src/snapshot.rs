//! Renderable board snapshot handed to the external transport.

use chatris_types::{Cell, SessionState, BOARD_COLS, BOARD_ROWS};
use serde::{Deserialize, Serialize};

/// One renderable frame: the row-major cell grid plus the counters the
/// transport displays. Read-only; producing one has no side effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Rows top to bottom, each left to right.
    pub rows: [[Cell; BOARD_COLS]; BOARD_ROWS],
    pub score: u32,
    pub lines: u32,
    /// `GameOver` frames are terminal summaries; the board is frozen.
    pub state: SessionState,
}

impl Frame {
    pub fn game_over(&self) -> bool {
        self.state == SessionState::GameOver
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            rows: [[None; BOARD_COLS]; BOARD_ROWS],
            score: 0,
            lines: 0,
            state: SessionState::Playing,
        }
    }
}
