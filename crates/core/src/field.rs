//! Field module - the 10x20 grid of locked cells
//!
//! Each cell holds a color identifier (0 = empty, 1..=7 = piece colors).
//! Storage is a flat row-major array; the dimensions never change, only cell
//! values do.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::types::{Color, EMPTY, FIELD_HEIGHT, FIELD_WIDTH};

const WIDTH: usize = FIELD_WIDTH as usize;
const HEIGHT: usize = FIELD_HEIGHT as usize;

/// Total number of cells on the field
const FIELD_SIZE: usize = WIDTH * HEIGHT;

/// Row indices found full during one clearing pass, in discovery order
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

/// The playing field - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    cells: [Color; FIELD_SIZE],
}

impl Field {
    /// Create a new empty field
    pub fn new() -> Self {
        Self {
            cells: [EMPTY; FIELD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if !Self::in_bounds(x, y) {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        FIELD_WIDTH
    }

    pub fn height(&self) -> u8 {
        FIELD_HEIGHT
    }

    /// Check if (x, y) lies inside the grid
    pub fn in_bounds(x: i8, y: i8) -> bool {
        x >= 0 && x < FIELD_WIDTH as i8 && y >= 0 && y < FIELD_HEIGHT as i8
    }

    /// Get cell color at (x, y), None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Color> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Check if (x, y) is inside the grid and holds a non-zero color.
    ///
    /// The bounds check short-circuits, so out-of-range queries read as free.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(c) if c != EMPTY)
    }

    /// Set cell at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, color: Color) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = color;
                true
            }
            None => false,
        }
    }

    /// Empty the cell at (x, y). Returns false if out of bounds.
    pub fn clear(&mut self, x: i8, y: i8) -> bool {
        self.set(x, y, EMPTY)
    }

    /// Blank the whole field
    pub fn reset(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|&c| c != EMPTY))
            .unwrap_or(false)
    }

    /// Borrow one row, None if out of range
    pub fn row(&self, y: usize) -> Option<&[Color]> {
        if y >= HEIGHT {
            return None;
        }
        let start = y * WIDTH;
        Some(&self.cells[start..start + WIDTH])
    }

    /// Remove row `y`: every row above moves down by one and row 0 is zeroed.
    pub fn remove_row(&mut self, y: usize) {
        if y >= HEIGHT {
            return;
        }
        for row in (1..=y).rev() {
            let src = (row - 1) * WIDTH;
            self.cells.copy_within(src..src + WIDTH, row * WIDTH);
        }
        self.cells[..WIDTH].fill(EMPTY);
    }

    /// Settle every full row, scanning bottom to top.
    ///
    /// After a removal the same index is examined again, since the row that
    /// shifted into it may be full as well.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut y = HEIGHT;
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                cleared.push(row);
                self.remove_row(row);
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Write the piece's occupied cells onto the field.
    ///
    /// Cells outside the grid (including rows above it) are skipped.
    pub fn draw_piece(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            self.set(x, y, piece.color);
        }
    }

    /// Zero the cells covered by the piece's footprint
    pub fn erase_piece(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            self.clear(x, y);
        }
    }

    /// Flat row-major view of all cells
    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    /// Copy the field into a 2D grid (for snapshots)
    pub fn write_grid(&self, out: &mut [[Color; WIDTH]; HEIGHT]) {
        for (dst, src) in out.iter_mut().zip(self.cells.chunks_exact(WIDTH)) {
            dst.copy_from_slice(src);
        }
    }

    /// Build a field from a 2D grid
    pub fn from_grid(grid: &[[Color; WIDTH]; HEIGHT]) -> Self {
        let mut field = Self::new();
        for (src, dst) in grid.iter().zip(field.cells.chunks_exact_mut(WIDTH)) {
            dst.copy_from_slice(src);
        }
        field
    }

    /// Fill a whole row with one color
    pub fn fill_row(&mut self, y: usize, color: Color) {
        if y < HEIGHT {
            self.cells[y * WIDTH..(y + 1) * WIDTH].fill(color);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == EMPTY)
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}
