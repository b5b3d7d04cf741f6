//! Shape tests - templates, rotation and collision

use brick_tetris::core::shapes::{occupied_count, BLANK};
use brick_tetris::core::{collides, rotate, template, Field, Piece};
use brick_tetris::types::{ShapeKind, SPAWN_X, SPAWN_Y};

#[test]
fn test_every_template_has_four_cells_of_its_color() {
    for kind in ShapeKind::ALL {
        let m = template(kind);
        assert_eq!(occupied_count(&m), 4, "{:?}", kind);
        assert!(m
            .iter()
            .flatten()
            .all(|&c| c == 0 || c == kind.color()));
    }
}

#[test]
fn test_i_template_layout() {
    let m = template(ShapeKind::I);
    assert_eq!(m[0], [1, 1, 1, 1]);
    assert_eq!(m[1], [0, 0, 0, 0]);
}

#[test]
fn test_rotate_i_becomes_vertical() {
    let r = rotate(&template(ShapeKind::I));
    for row in r.iter() {
        assert_eq!(row, &[0, 0, 0, 1]);
    }
}

#[test]
fn test_four_rotations_restore_every_shape() {
    for kind in ShapeKind::ALL {
        let m = template(kind);
        let back = rotate(&rotate(&rotate(&rotate(&m))));
        assert_eq!(back, m, "{:?}", kind);
    }
}

#[test]
fn test_rotate_blank_is_blank() {
    assert_eq!(rotate(&BLANK), BLANK);
}

#[test]
fn test_spawned_piece_position() {
    let piece = Piece::new(template(ShapeKind::T));
    assert_eq!((piece.x, piece.y), (SPAWN_X, SPAWN_Y));
    assert_eq!(piece.color, ShapeKind::T.color());
}

#[test]
fn test_collision_with_walls_and_floor() {
    let field = Field::new();
    let i = template(ShapeKind::I);

    assert!(!collides(&Piece::at(i, 0, 0), &field));
    assert!(!collides(&Piece::at(i, 6, 0), &field));
    assert!(collides(&Piece::at(i, -1, 0), &field));
    assert!(collides(&Piece::at(i, 7, 0), &field));
    assert!(!collides(&Piece::at(i, 0, 19), &field));
    assert!(collides(&Piece::at(i, 0, 20), &field));
}

#[test]
fn test_rows_above_field_are_free() {
    let mut field = Field::new();
    field.fill_row(0, 7);
    let vertical = rotate(&template(ShapeKind::I));
    // Column 3 of the matrix; rows -4..-1 are above the field.
    assert!(!collides(&Piece::at(vertical, 0, -4), &field));
    assert!(collides(&Piece::at(vertical, 0, -3), &field));
}

#[test]
fn test_collision_with_locked_cells() {
    let mut field = Field::new();
    field.set(4, 1, 2);
    let t = Piece::new(template(ShapeKind::T));
    assert!(t.collides(&field));
    assert!(!t.shifted(3, 0).collides(&field));
}
