//! Line-clear and scoring - invoked immediately after a lock
//!
//! Scans rows top to bottom, collapses each full one, and maps the clear
//! count through a fixed reward table. A single lock can complete at most
//! four rows.

use arrayvec::ArrayVec;
use chatris_types::{BOARD_ROWS, LINE_SCORES};

use crate::board::Board;

/// Collapse every full row and return the cleared row indices, top to
/// bottom. After a collapse the scan continues below the collapsed row, so
/// nothing is shifted twice within one lock.
pub fn clear_full_rows(board: &mut Board) -> ArrayVec<usize, 4> {
    let mut cleared = ArrayVec::new();
    for row in 0..BOARD_ROWS {
        if board.row_full(row) {
            board.collapse(row);
            cleared.push(row);
        }
    }
    cleared
}

/// Points for a simultaneous clear of `count` rows. Zero clears score zero.
pub fn line_clear_score(count: usize) -> u32 {
    assert!(count < LINE_SCORES.len(), "impossible clear count: {count}");
    LINE_SCORES[count]
}
