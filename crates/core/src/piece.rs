//! Piece module - the falling tetromino and collision detection

use crate::field::Field;
use crate::shapes::{matrix_color, rotate};
use crate::types::{Color, Matrix, EMPTY, FIELD_HEIGHT, FIELD_WIDTH, SPAWN_X, SPAWN_Y};

/// Active falling piece.
///
/// `x`/`y` locate the top-left corner of the 4x4 matrix on the field; `y` may
/// be negative while a piece sits partly above the visible rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub matrix: Matrix,
    pub x: i8,
    pub y: i8,
    pub color: Color,
}

impl Piece {
    /// Create a piece from a template at the spawn position
    pub fn new(matrix: Matrix) -> Self {
        Self::at(matrix, SPAWN_X, SPAWN_Y)
    }

    /// Create a piece from a template at an explicit position
    pub fn at(matrix: Matrix, x: i8, y: i8) -> Self {
        Self {
            matrix,
            x,
            y,
            color: matrix_color(&matrix),
        }
    }

    /// Absolute field coordinates of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.matrix.iter().enumerate().flat_map(move |(i, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &c)| c != EMPTY)
                .map(move |(j, _)| (self.x + j as i8, self.y + i as i8))
        })
    }

    /// Same piece shifted by (dx, dy)
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece rotated 90 degrees clockwise about its matrix
    pub fn rotated(&self) -> Self {
        Self {
            matrix: rotate(&self.matrix),
            ..*self
        }
    }

    /// Check the piece against field bounds and locked cells
    pub fn collides(&self, field: &Field) -> bool {
        collides(self, field)
    }
}

/// Check whether a piece configuration is illegal on the field.
///
/// Any occupied cell left of column 0, right of the last column or below the
/// last row collides. Cells in negative rows are exempt from the occupancy
/// check; all other cells collide with a non-empty field cell.
pub fn collides(piece: &Piece, field: &Field) -> bool {
    piece.cells().any(|(x, y)| {
        if x < 0 || x >= FIELD_WIDTH as i8 || y >= FIELD_HEIGHT as i8 {
            return true;
        }
        y >= 0 && field.is_occupied(x, y)
    })
}
