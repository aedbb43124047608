//! Grid tests - cell storage, row clearing and screen mapping

use grid_arcade::core::{CellLayout, Grid};
use grid_arcade::types::Rgb;

const RED: Rgb = Rgb::new(255, 0, 0);
const BLUE: Rgb = Rgb::new(0, 0, 255);

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new(20, 20);
    assert_eq!(grid.size(), (20, 20));
    for y in 0..20 {
        for x in 0..20 {
            assert_eq!(grid.get((x, y)), None, "cell ({}, {}) should be empty", x, y);
        }
    }
}

#[test]
fn test_out_of_range_access() {
    let mut grid = Grid::new(4, 3);
    assert!(!grid.set((-1, 0), Some(RED)));
    assert!(!grid.set((4, 0), Some(RED)));
    assert!(!grid.set((0, 3), Some(RED)));
    assert_eq!(grid.get((-1, 0)), None);
    assert_eq!(grid.occupied().count(), 0);
}

#[test]
fn test_set_flip_and_clear() {
    let mut grid = Grid::new(4, 3);
    assert!(grid.set((1, 2), Some(BLUE)));
    assert_eq!(grid.get((1, 2)), Some(BLUE));

    assert!(grid.flip((1, 2), RED));
    assert_eq!(grid.get((1, 2)), None);
    assert!(grid.flip((1, 2), RED));
    assert_eq!(grid.get((1, 2)), Some(RED));

    grid.clear();
    assert_eq!(grid.occupied().count(), 0);
}

#[test]
fn test_clear_full_rows_compacts_down() {
    let mut grid = Grid::new(3, 5);
    // Row 1 has a marker, rows 2 and 4 are full, row 3 has a gap.
    grid.set((0, 1), Some(BLUE));
    for x in 0..3 {
        grid.set((x, 2), Some(RED));
        grid.set((x, 4), Some(RED));
    }
    grid.set((2, 3), Some(BLUE));

    assert!(grid.is_row_full(2));
    assert!(!grid.is_row_full(3));
    assert_eq!(grid.clear_full_rows(), 2);

    let left: Vec<_> = grid.occupied().map(|(pos, _)| pos).collect();
    assert_eq!(left, vec![(0, 3), (2, 4)]);
    assert!(!grid.is_row_full(0));
}

#[test]
fn test_clear_full_rows_on_full_grid() {
    let mut grid = Grid::new(2, 2);
    for y in 0..2 {
        for x in 0..2 {
            grid.set((x, y), Some(RED));
        }
    }
    assert_eq!(grid.clear_full_rows(), 2);
    assert_eq!(grid.occupied().count(), 0);
}

#[test]
fn test_map_point_round_trips_cell_rect() {
    // 10px cells, 1px border, drawn at (20, 10).
    let layout = CellLayout {
        cell_w: 10,
        cell_h: 10,
        gap: 1,
        origin: (20, 10),
    };
    let grid = Grid::with_layout(20, 20, layout);

    for y in 0..20 {
        for x in 0..20 {
            let (px, py, w, h) = grid.cell_rect((x, y));
            assert_eq!((w, h), (10, 10));
            let centre = (px + w as i32 / 2, py + h as i32 / 2);
            assert_eq!(grid.map_point_to_cell(centre), Some((x, y)));
            assert_eq!(grid.map_point_to_cell((px, py)), Some((x, y)));
        }
    }
}

#[test]
fn test_map_point_outside_is_none() {
    let layout = CellLayout {
        cell_w: 10,
        cell_h: 10,
        gap: 1,
        origin: (20, 10),
    };
    let grid = Grid::with_layout(20, 20, layout);

    assert_eq!(grid.map_point_to_cell((19, 50)), None);
    assert_eq!(grid.map_point_to_cell((50, 9)), None);
    assert_eq!(grid.map_point_to_cell((-500, -500)), None);
    assert_eq!(grid.map_point_to_cell((20 + 20 * 11, 50)), None);
}

#[test]
fn test_default_layout_is_one_unit_per_cell() {
    let grid = Grid::new(5, 5);
    assert_eq!(grid.cell_rect((3, 4)), (3, 4, 1, 1));
    assert_eq!(grid.map_point_to_cell((3, 4)), Some((3, 4)));
    assert_eq!(grid.map_point_to_cell((5, 0)), None);
}
