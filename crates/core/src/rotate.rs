//! Rotation system - pivot rotation with tuned corrections and wall kicks
//!
//! A clockwise rotation maps each cell through the pivot formula, applies a
//! per-shape correction for the current rotation index, then searches an
//! ordered wall-kick offset list for the first kick that fits the board. The
//! search is first-fit and order-sensitive; list order is part of the
//! contract. The I shape uses its own kick table; J/L/S/T/Z share one; O
//! never reaches this module.
//!
//! The correction tables are hand-tuned, not derived from a geometric rule:
//! they keep each shape inside its visual box at spawn and sum to zero over
//! the four rotation indices, so four clockwise rotations on an open board
//! are the identity.

use chatris_types::Shape;

use crate::board::Board;
use crate::catalog::{CellPos, Piece, PieceSpec};

/// Post-rotation correction, (d_row, d_col), indexed by the rotation index
/// the piece is rotating *from*.
pub fn adjustment(shape: Shape, rot: u8) -> (i8, i8) {
    let table: [(i8, i8); 4] = match shape {
        Shape::I => [(1, 0), (0, 0), (1, 0), (-2, 0)],
        Shape::S => [(0, 1), (0, 0), (0, -1), (0, 0)],
        Shape::Z => [(0, -1), (0, 0), (0, 1), (0, 0)],
        Shape::J | Shape::L | Shape::T => [(0, 0); 4],
        Shape::O => [(0, 0); 4],
    };
    table[(rot % 4) as usize]
}

/// Wall-kick offsets for the I shape, indexed by the pre-rotation index.
const I_KICKS: [[(i8, i8); 5]; 4] = [
    [(0, 0), (0, -2), (0, 1), (-1, -2), (2, 1)],
    [(0, 0), (0, -1), (0, 2), (2, -1), (-1, 2)],
    [(0, 0), (0, 2), (0, -1), (1, 2), (-2, -1)],
    [(0, 0), (0, 1), (0, -2), (-2, 1), (1, -2)],
];

/// Wall-kick offsets shared by J/L/S/T/Z, indexed by the pre-rotation index.
const JLSTZ_KICKS: [[(i8, i8); 5]; 4] = [
    [(0, 0), (0, -1), (1, -1), (-2, 0), (-2, -1)],
    [(0, 0), (0, 1), (-1, 1), (2, 0), (2, 1)],
    [(0, 0), (0, 1), (1, 1), (-2, 0), (-2, 1)],
    [(0, 0), (0, -1), (-1, -1), (2, 0), (2, -1)],
];

fn kick_offsets(shape: Shape, rot: u8) -> &'static [(i8, i8); 5] {
    match shape {
        Shape::I => &I_KICKS[(rot % 4) as usize],
        _ => &JLSTZ_KICKS[(rot % 4) as usize],
    }
}

/// Compute the raw (unvalidated) candidate cells for a clockwise rotation.
fn raw_rotation(piece: &Piece) -> [CellPos; 4] {
    let (pr, pc) = piece.pivot();
    let (ar, ac) = adjustment(piece.shape, piece.rot);

    let mut out = [(0i8, 0i8); 4];
    for (i, &(r, c)) in piece.cells.iter().enumerate() {
        out[i] = ((c - pc) + pr + ar, -(r - pr) + pc + ac);
    }
    out
}

/// Try to rotate the piece clockwise in place on the board.
///
/// On success the old cells are cleared, the new cells painted, and the
/// rotation index advances. When every kick is exhausted the piece and board
/// are left untouched and `false` is returned; a rejected rotation is a
/// normal outcome, not an error.
pub fn try_rotate(board: &mut Board, piece: &mut Piece) -> bool {
    if !PieceSpec::of(piece.shape).rotates {
        return false;
    }

    let raw = raw_rotation(piece);

    for &(kr, kc) in kick_offsets(piece.shape, piece.rot) {
        let mut candidate = raw;
        for cell in &mut candidate {
            cell.0 += kr;
            cell.1 += kc;
        }

        let fits = candidate.iter().all(|&(r, c)| {
            Board::in_bounds(r, c) && (!board.occupied(r, c) || piece.contains(r, c))
        });

        if fits {
            for &(r, c) in &piece.cells {
                board.clear(r, c);
            }
            for &(r, c) in &candidate {
                board.set(r, c, piece.shape);
            }
            piece.cells = candidate;
            piece.rot = (piece.rot + 1) % 4;
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paint(board: &mut Board, piece: &Piece) {
        for &(r, c) in &piece.cells {
            board.set(r, c, piece.shape);
        }
    }

    fn sorted(cells: [CellPos; 4]) -> Vec<CellPos> {
        let mut v = cells.to_vec();
        v.sort();
        v
    }

    #[test]
    fn test_four_rotations_are_identity() {
        for shape in Shape::ALL {
            if shape == Shape::O {
                continue;
            }
            let mut board = Board::new();
            // Mid-board so no kick is ever needed.
            let mut piece = Piece::spawn(shape, false);
            for cell in &mut piece.cells {
                cell.0 += 8;
            }
            paint(&mut board, &piece);
            let original = sorted(piece.cells);

            for turn in 0..4 {
                assert!(try_rotate(&mut board, &mut piece), "{shape:?} turn {turn}");
            }

            assert_eq!(sorted(piece.cells), original, "{shape:?} cyclic invariant");
            assert_eq!(piece.rot, 0);
        }
    }

    #[test]
    fn test_rotation_repaints_board() {
        let mut board = Board::new();
        let mut piece = Piece::spawn(Shape::T, false);
        for cell in &mut piece.cells {
            cell.0 += 8;
        }
        paint(&mut board, &piece);

        assert!(try_rotate(&mut board, &mut piece));
        assert_eq!(board.filled_count(), 4);
        for &(r, c) in &piece.cells {
            assert_eq!(board.cell(r, c), Some(Shape::T));
        }
    }

    #[test]
    fn test_o_never_rotates() {
        let mut board = Board::new();
        let mut piece = Piece::spawn(Shape::O, false);
        paint(&mut board, &piece);
        let before = piece;

        assert!(!try_rotate(&mut board, &mut piece));
        assert_eq!(piece, before);
    }

    #[test]
    fn test_adjustments_sum_to_zero() {
        for shape in Shape::ALL {
            let sum = (0..4).fold((0i8, 0i8), |acc, rot| {
                let (r, c) = adjustment(shape, rot);
                (acc.0 + r, acc.1 + c)
            });
            assert_eq!(sum, (0, 0), "{shape:?} corrections must cancel");
        }
    }

    #[test]
    fn test_wall_kick_near_left_wall() {
        let mut board = Board::new();
        // Vertical I hugging the left wall; the raw rotation would poke
        // through it, so a kick must fire.
        let mut piece = Piece::spawn(Shape::I, false);
        assert!(try_rotate(&mut board, &mut piece)); // now vertical
        for cell in &mut piece.cells {
            board.clear(cell.0, cell.1);
            cell.0 += 6;
            cell.1 -= 4; // col 0
        }
        paint(&mut board, &piece);

        assert!(try_rotate(&mut board, &mut piece));
        for &(r, c) in &piece.cells {
            assert!(Board::in_bounds(r, c));
        }
    }

    #[test]
    fn test_rejected_rotation_leaves_state_untouched() {
        let mut board = Board::new();
        let mut piece = Piece::spawn(Shape::T, false);
        for cell in &mut piece.cells {
            cell.0 += 8;
        }
        paint(&mut board, &piece);

        // Wall in every cell the rotation or any kick could land on.
        for r in 0..18 {
            for c in 0..10 {
                if !piece.contains(r, c) {
                    board.set(r, c, Shape::I);
                }
            }
        }

        let before_piece = piece;
        let before_board = board.clone();
        assert!(!try_rotate(&mut board, &mut piece));
        assert_eq!(piece, before_piece);
        assert_eq!(board, before_board);
    }

    #[test]
    fn test_self_overlap_is_acceptable() {
        // A piece alone mid-board always has its own cells as valid targets.
        let mut board = Board::new();
        let mut piece = Piece::spawn(Shape::S, false);
        for cell in &mut piece.cells {
            cell.0 += 8;
        }
        paint(&mut board, &piece);
        assert!(try_rotate(&mut board, &mut piece));
    }
}
