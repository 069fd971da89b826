//! Board module - manages the game grid
//!
//! The board is an 18x10 grid where each cell is empty or filled with a shape
//! identity. Uses a flat array for cache locality and zero allocation.
//! Coordinates: (row, col) where row ranges 0..17 (top to bottom) and col
//! ranges 0..9 (left to right). Negative rows are treated as free so pieces
//! may sit provisionally above the visible board during spawn.

use chatris_types::{Cell, Shape, BOARD_COLS, BOARD_ROWS};

/// Total number of cells on the board
const BOARD_SIZE: usize = BOARD_ROWS * BOARD_COLS;

/// The game board - 18 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * COLS + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col). None when out of the stored grid.
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_ROWS as i8 || col < 0 || col >= BOARD_COLS as i8 {
            return None;
        }
        Some((row as usize) * BOARD_COLS + (col as usize))
    }

    /// Get cell at (row, col). Rows above the board read as empty.
    pub fn cell(&self, row: i8, col: i8) -> Cell {
        Self::index(row, col).and_then(|idx| self.cells[idx])
    }

    /// Whether (row, col) holds a locked cell. Rows above the board are free.
    pub fn occupied(&self, row: i8, col: i8) -> bool {
        self.cell(row, col).is_some()
    }

    /// Whether (row, col) lies inside the stored grid.
    pub fn in_bounds(row: i8, col: i8) -> bool {
        row >= 0 && row < BOARD_ROWS as i8 && col >= 0 && col < BOARD_COLS as i8
    }

    /// Whether a piece cell may occupy (row, col): inside the side and bottom
    /// walls, with rows above the board allowed during spawn.
    pub fn inside_walls(row: i8, col: i8) -> bool {
        col >= 0 && col < BOARD_COLS as i8 && row < BOARD_ROWS as i8
    }

    /// Paint a cell with a shape identity. Writes above the board are dropped;
    /// those cells exist only in the piece until it descends into view.
    pub fn set(&mut self, row: i8, col: i8, shape: Shape) {
        if let Some(idx) = Self::index(row, col) {
            self.cells[idx] = Some(shape);
        }
    }

    /// Clear a cell back to empty.
    pub fn clear(&mut self, row: i8, col: i8) {
        if let Some(idx) = Self::index(row, col) {
            self.cells[idx] = None;
        }
    }

    /// Check if a row is completely filled
    pub fn row_full(&self, row: usize) -> bool {
        assert!(row < BOARD_ROWS, "row scan out of bounds: {row}");
        let start = row * BOARD_COLS;
        self.cells[start..start + BOARD_COLS]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Collapse a row: every row above it is copied one row down, and row 0
    /// becomes empty. Copies run bottom-up so a shifted row is never reused
    /// as a source within the same collapse.
    pub fn collapse(&mut self, row: usize) {
        assert!(row < BOARD_ROWS, "collapse out of bounds: {row}");
        for r in (1..=row).rev() {
            let src = (r - 1) * BOARD_COLS;
            let dst = r * BOARD_COLS;
            self.cells.copy_within(src..src + BOARD_COLS, dst);
        }
        for cell in &mut self.cells[0..BOARD_COLS] {
            *cell = None;
        }
    }

    /// Write the grid into a row-major snapshot buffer. Read-only.
    pub fn write_rows(&self, out: &mut [[Cell; BOARD_COLS]; BOARD_ROWS]) {
        for (row, out_row) in out.iter_mut().enumerate() {
            let start = row * BOARD_COLS;
            out_row.copy_from_slice(&self.cells[start..start + BOARD_COLS]);
        }
    }

    /// Number of filled cells on the board.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
