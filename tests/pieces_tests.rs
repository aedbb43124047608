//! Pieces tests - tetromino bitmaps and clockwise rotation

use std::collections::HashSet;

use grid_arcade::core::{canonical_shape, PieceSet, Shape};
use grid_arcade::types::PieceKind;

#[test]
fn test_four_rotations_return_original() {
    for kind in PieceKind::ALL {
        let shape = canonical_shape(kind);
        let turned = shape.rotate().rotate().rotate().rotate();
        assert_eq!(turned, shape, "{:?}", kind);
    }
}

#[test]
fn test_rotation_preserves_cell_count() {
    let set = PieceSet::standard();
    for kind in PieceKind::ALL {
        for rotation in 0..4 {
            assert_eq!(set.shape(kind, rotation).cells().len(), 4);
        }
    }
}

#[test]
fn test_i_piece_turns_horizontal() {
    let i = canonical_shape(PieceKind::I);
    assert_eq!(
        i.rotate().cells().as_slice(),
        &[(0, 2), (1, 2), (2, 2), (3, 2)]
    );
}

#[test]
fn test_t_piece_clockwise() {
    // .X.      .X.
    // XXX  ->  .XX
    // ...      .X.
    let t = canonical_shape(PieceKind::T);
    assert_eq!(t.rotate(), Shape::from_rows(&[".X.", ".XX", ".X."]));
}

#[test]
fn test_distinct_orientations() {
    let set = PieceSet::standard();
    let count = |kind| {
        (0..4)
            .map(|r| set.shape(kind, r))
            .collect::<HashSet<_>>()
            .len()
    };
    assert_eq!(count(PieceKind::O), 1);
    assert_eq!(count(PieceKind::T), 4);
    assert_eq!(count(PieceKind::J), 4);
    assert_eq!(count(PieceKind::L), 4);
    // Bitmaps are not re-centred, so S, Z and I still have four distinct frames.
    assert_eq!(count(PieceKind::S), 4);
    assert_eq!(count(PieceKind::I), 4);
}

#[test]
fn test_piece_colors_are_distinct() {
    let colors: HashSet<_> = PieceKind::ALL.iter().map(|k| k.color()).collect();
    assert_eq!(colors.len(), PieceKind::ALL.len());
}
