//! Shape library - the seven tetromino templates
//!
//! Every shape is a 4x4 color matrix whose occupied cells carry the shape's
//! color identifier. Templates sit in the top rows of the matrix so a freshly
//! spawned piece starts flush with row 0 of the field.

use crate::types::{Color, Matrix, ShapeKind, EMPTY, FIGURE_SIZE};

/// Build the 4x4 template for a shape
pub fn template(kind: ShapeKind) -> Matrix {
    let cells: [(usize, usize); 4] = match kind {
        ShapeKind::I => [(0, 0), (0, 1), (0, 2), (0, 3)],
        ShapeKind::O => [(1, 1), (1, 2), (2, 1), (2, 2)],
        ShapeKind::T => [(0, 1), (1, 0), (1, 1), (1, 2)],
        ShapeKind::J => [(0, 0), (1, 0), (1, 1), (1, 2)],
        ShapeKind::L => [(0, 2), (1, 0), (1, 1), (1, 2)],
        ShapeKind::S => [(0, 1), (0, 2), (1, 0), (1, 1)],
        ShapeKind::Z => [(0, 0), (0, 1), (1, 1), (1, 2)],
    };

    let mut matrix = [[EMPTY; FIGURE_SIZE]; FIGURE_SIZE];
    for (row, col) in cells {
        matrix[row][col] = kind.color();
    }
    matrix
}

/// Rotate a template 90 degrees clockwise.
///
/// The cell at row i, column j moves to row j, column 3 - i. Works on any
/// 4x4 matrix, so non-square shapes pivot around the matrix center.
pub fn rotate(matrix: &Matrix) -> Matrix {
    let mut out = [[EMPTY; FIGURE_SIZE]; FIGURE_SIZE];
    for (i, row) in matrix.iter().enumerate() {
        for (j, &cell) in row.iter().enumerate() {
            out[j][FIGURE_SIZE - 1 - i] = cell;
        }
    }
    out
}

/// Color of the template's occupied cells, 0 for a blank matrix
pub fn matrix_color(matrix: &Matrix) -> Color {
    matrix
        .iter()
        .flatten()
        .copied()
        .find(|&c| c != EMPTY)
        .unwrap_or(EMPTY)
}

/// Number of occupied cells in the template
pub fn occupied_count(matrix: &Matrix) -> usize {
    matrix.iter().flatten().filter(|&&c| c != EMPTY).count()
}

/// A blank template (used for the cleared next-piece buffer)
pub const BLANK: Matrix = [[EMPTY; FIGURE_SIZE]; FIGURE_SIZE];
