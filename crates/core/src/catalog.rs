//! Piece catalog - static definitions for the seven shapes
//!
//! Each shape carries its four canonical start cells (absolute board
//! coordinates near the top center), a per-rotation-index pivot-cell
//! selector, and a rotatable flag. The O shape is marked non-rotatable and
//! bypasses the rotation system entirely.

use chatris_types::Shape;

/// One absolute board coordinate, (row, col).
pub type CellPos = (i8, i8);

/// Static definition of a shape.
#[derive(Debug, Clone, Copy)]
pub struct PieceSpec {
    pub shape: Shape,
    /// Canonical spawn cells, ordered. Order is stable across the piece's
    /// lifetime; the pivot index selects into it.
    pub start_cells: [CellPos; 4],
    /// Which of the four cells is the rotation center, per rotation index.
    pub pivot_index: [usize; 4],
    pub rotates: bool,
}

const I_SPEC: PieceSpec = PieceSpec {
    shape: Shape::I,
    start_cells: [(0, 3), (0, 4), (0, 5), (0, 6)],
    pivot_index: [1, 1, 1, 1],
    rotates: true,
};

const J_SPEC: PieceSpec = PieceSpec {
    shape: Shape::J,
    start_cells: [(0, 3), (1, 3), (1, 4), (1, 5)],
    pivot_index: [2, 2, 2, 2],
    rotates: true,
};

const L_SPEC: PieceSpec = PieceSpec {
    shape: Shape::L,
    start_cells: [(0, 5), (1, 3), (1, 4), (1, 5)],
    pivot_index: [2, 2, 2, 2],
    rotates: true,
};

const O_SPEC: PieceSpec = PieceSpec {
    shape: Shape::O,
    start_cells: [(0, 4), (0, 5), (1, 4), (1, 5)],
    pivot_index: [0, 0, 0, 0],
    rotates: false,
};

const S_SPEC: PieceSpec = PieceSpec {
    shape: Shape::S,
    start_cells: [(0, 4), (0, 5), (1, 3), (1, 4)],
    pivot_index: [3, 3, 3, 3],
    rotates: true,
};

const T_SPEC: PieceSpec = PieceSpec {
    shape: Shape::T,
    start_cells: [(0, 4), (1, 3), (1, 4), (1, 5)],
    pivot_index: [2, 2, 2, 2],
    rotates: true,
};

const Z_SPEC: PieceSpec = PieceSpec {
    shape: Shape::Z,
    start_cells: [(0, 3), (0, 4), (1, 4), (1, 5)],
    pivot_index: [2, 2, 2, 2],
    rotates: true,
};

impl PieceSpec {
    /// Look up the static definition for a shape.
    pub fn of(shape: Shape) -> &'static PieceSpec {
        match shape {
            Shape::I => &I_SPEC,
            Shape::J => &J_SPEC,
            Shape::L => &L_SPEC,
            Shape::O => &O_SPEC,
            Shape::S => &S_SPEC,
            Shape::T => &T_SPEC,
            Shape::Z => &Z_SPEC,
        }
    }

    /// Spawn cells, optionally raised one row for the spawn-higher fallback.
    pub fn spawn_cells(&self, higher: bool) -> [CellPos; 4] {
        let mut cells = self.start_cells;
        if higher {
            for cell in &mut cells {
                cell.0 -= 1;
            }
        }
        cells
    }
}

/// The active falling piece: shape identity, four ordered absolute cells,
/// and a rotation index cycling modulo 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub shape: Shape,
    pub cells: [CellPos; 4],
    pub rot: u8,
}

impl Piece {
    /// Create a piece at its canonical spawn cells.
    pub fn spawn(shape: Shape, higher: bool) -> Self {
        Self {
            shape,
            cells: PieceSpec::of(shape).spawn_cells(higher),
            rot: 0,
        }
    }

    /// The rotation-center cell for the current rotation index.
    pub fn pivot(&self) -> CellPos {
        self.cells[PieceSpec::of(self.shape).pivot_index[self.rot as usize]]
    }

    /// Whether (row, col) is one of this piece's own cells.
    pub fn contains(&self, row: i8, col: i8) -> bool {
        self.cells.contains(&(row, col))
    }
}
