//! Movement resolution - per-tick horizontal intent and fall distance
//!
//! Horizontal and vertical motion are evaluated together. When the requested
//! horizontal shift combined with the fall would collide, the horizontal
//! intent is cancelled for the tick and only the vertical component is
//! retried. A resolved fall distance of zero means the piece locks.

use crate::board::Board;
use crate::catalog::Piece;

/// Input pending for one tick, already drained from the session mailbox.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Horizontal intent: -1, 0 or +1.
    pub dx: i8,
    /// Accelerated fall: take the maximal fitting distance this tick.
    pub soft_drop: bool,
}

/// Whether every piece cell, shifted by (dr, dc), stays inside the walls and
/// off non-self filled cells. Rows above the board count as free.
pub fn shift_fits(board: &Board, piece: &Piece, dr: i8, dc: i8) -> bool {
    piece.cells.iter().all(|&(r, c)| {
        let (nr, nc) = (r + dr, c + dc);
        Board::inside_walls(nr, nc) && (!board.occupied(nr, nc) || piece.contains(nr, nc))
    })
}

/// Vertical distance to attempt this tick: 1 normally, or the maximal
/// fitting distance under soft drop. Combined with the horizontal intent.
pub fn fall_distance(board: &Board, piece: &Piece, dc: i8, soft_drop: bool) -> i8 {
    if soft_drop {
        let mut dist: i8 = 0;
        while shift_fits(board, piece, dist + 1, dc) {
            dist += 1;
        }
        dist
    } else if shift_fits(board, piece, 1, dc) {
        1
    } else {
        0
    }
}

/// Resolve the tick's motion. `Some((dr, dc))` is the shift to apply;
/// `None` means no downward motion is possible and the piece locks.
pub fn resolve(board: &Board, piece: &Piece, input: TickInput) -> Option<(i8, i8)> {
    let mut dc = input.dx.clamp(-1, 1);
    let mut dr = fall_distance(board, piece, dc, input.soft_drop);

    if dr == 0 && dc != 0 {
        // Horizontal intent cancelled for this tick; vertical retried alone.
        dc = 0;
        dr = fall_distance(board, piece, 0, input.soft_drop);
    }

    (dr > 0).then_some((dr, dc))
}

/// Move the piece on the board: clear the old cells, paint the new ones.
pub fn apply_shift(board: &mut Board, piece: &mut Piece, dr: i8, dc: i8) {
    for &(r, c) in &piece.cells {
        board.clear(r, c);
    }
    for cell in &mut piece.cells {
        cell.0 += dr;
        cell.1 += dc;
    }
    for &(r, c) in &piece.cells {
        board.set(r, c, piece.shape);
    }
}
