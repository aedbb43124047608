//! Grid module - the colored-cell store shared by both games
//!
//! A `width x height` grid where each cell is either empty or holds a color.
//! Storage is a flat row-major vector (`y * width + x`).
//!
//! The grid also knows where it sits on screen through a [`CellLayout`], so a
//! pointer position can be mapped back to the cell under it.

use crate::types::{Pos, Rgb};

/// A cell of the grid: `None` is empty.
pub type Cell = Option<Rgb>;

/// On-screen geometry of a grid.
///
/// Cells are `cell_w x cell_h` units with `gap` units of border between
/// neighbours and around the outside. With `gap = 0` cells are packed edge to
/// edge starting at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellLayout {
    pub cell_w: u16,
    pub cell_h: u16,
    pub gap: u16,
    pub origin: (i32, i32),
}

impl Default for CellLayout {
    fn default() -> Self {
        Self {
            cell_w: 1,
            cell_h: 1,
            gap: 0,
            origin: (0, 0),
        }
    }
}

/// Longest grid side; every cell must be addressable by a [`Pos`].
pub const MAX_SIDE: u16 = i16::MAX as u16;

/// Screen rectangle `(x, y, w, h)` covered by one cell.
pub type CellRect = (i32, i32, u16, u16);

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    layout: CellLayout,
}

impl Grid {
    /// Create an empty grid
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_layout(width, height, CellLayout::default())
    }

    /// Sides longer than [`MAX_SIDE`] are clamped to it.
    pub fn with_layout(width: u16, height: u16, layout: CellLayout) -> Self {
        let (width, height) = (width.min(MAX_SIDE), height.min(MAX_SIDE));
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
            layout,
        }
    }

    #[inline(always)]
    fn index(&self, (x, y): Pos) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i16 || y >= self.height as i16 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.index(pos).is_some()
    }

    /// Color at `pos`; `None` when the cell is empty or out of range.
    pub fn get(&self, pos: Pos) -> Cell {
        self.index(pos).and_then(|idx| self.cells[idx])
    }

    pub fn is_empty(&self, pos: Pos) -> bool {
        matches!(self.index(pos), Some(idx) if self.cells[idx].is_none())
    }

    /// Set the cell at `pos`. Returns false (and stores nothing) when out of range.
    pub fn set(&mut self, pos: Pos, cell: Cell) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Toggle a cell between empty and `color`.
    pub fn flip(&mut self, pos: Pos, color: Rgb) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = match self.cells[idx] {
                    Some(_) => None,
                    None => Some(color),
                };
                true
            }
            None => false,
        }
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Occupied cells with their coordinates, row by row.
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Rgb)> + '_ {
        let width = self.width as usize;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|color| (((i % width) as i16, (i / width) as i16), color))
        })
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: u16) -> bool {
        if y >= self.height {
            return false;
        }
        self.row(y as usize).iter().all(Option::is_some)
    }

    fn row(&self, y: usize) -> &[Cell] {
        let width = self.width as usize;
        &self.cells[y * width..(y + 1) * width]
    }

    /// Remove every full row, shifting the rows above down, and return how
    /// many rows were removed. Rows freed at the top are empty.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let mut cleared = 0;
        let mut write_y = self.height as usize;

        // Scan bottom-up, compacting kept rows towards the bottom.
        for read_y in (0..self.height as usize).rev() {
            if self.is_row_full(read_y as u16) {
                cleared += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                self.cells
                    .copy_within(read_y * width..(read_y + 1) * width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(None);
        cleared
    }

    pub fn layout(&self) -> CellLayout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: CellLayout) {
        self.layout = layout;
    }

    /// Screen rectangle of the cell at `(x, y)`.
    pub fn cell_rect(&self, (x, y): Pos) -> CellRect {
        let l = self.layout;
        let gap = l.gap as i32;
        (
            l.origin.0 + gap * (x as i32 + 1) + l.cell_w as i32 * x as i32,
            l.origin.1 + gap * (y as i32 + 1) + l.cell_h as i32 * y as i32,
            l.cell_w,
            l.cell_h,
        )
    }

    /// Map a screen position to the cell under it.
    ///
    /// Half of the border is attributed to each neighbouring cell. Points
    /// outside the grid's area map to `None`.
    pub fn map_point_to_cell(&self, (px, py): (i32, i32)) -> Option<Pos> {
        let l = self.layout;
        let half_gap = (l.gap / 2) as i32;
        let step_x = (l.cell_w + l.gap) as i32;
        let step_y = (l.cell_h + l.gap) as i32;
        if step_x == 0 || step_y == 0 {
            return None;
        }

        let x = (px - l.origin.0 - half_gap).div_euclid(step_x);
        let y = (py - l.origin.1 - half_gap).div_euclid(step_y);
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((x as i16, y as i16))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAGENTA: Rgb = Rgb::new(255, 0, 255);

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(10, 20);
        assert_eq!(grid.index((0, 0)), Some(0));
        assert_eq!(grid.index((9, 0)), Some(9));
        assert_eq!(grid.index((0, 1)), Some(10));
        assert_eq!(grid.index((9, 19)), Some(199));
        assert_eq!(grid.index((-1, 0)), None);
        assert_eq!(grid.index((10, 0)), None);
        assert_eq!(grid.index((0, 20)), None);
    }

    #[test]
    fn test_sides_clamped_to_addressable_range() {
        let mut grid = Grid::new(u16::MAX, 2);
        assert_eq!(grid.size(), (MAX_SIDE, 2));
        assert_eq!(grid.cells().len(), MAX_SIDE as usize * 2);

        let last = (i16::MAX - 1, 1);
        assert!(grid.contains(last));
        assert!(grid.set(last, Some(MAGENTA)));
        assert_eq!(grid.get(last), Some(MAGENTA));
        assert!(!grid.contains((i16::MAX, 0)));
    }

    #[test]
    fn test_out_of_range_set_is_not_stored() {
        let mut grid = Grid::new(3, 3);
        assert!(!grid.set((3, 0), Some(MAGENTA)));
        assert!(!grid.set((0, -1), Some(MAGENTA)));
        assert!(grid.cells().iter().all(Option::is_none));
    }

    #[test]
    fn test_flip_toggles() {
        let mut grid = Grid::new(3, 3);
        assert!(grid.flip((1, 1), MAGENTA));
        assert_eq!(grid.get((1, 1)), Some(MAGENTA));
        assert!(grid.flip((1, 1), MAGENTA));
        assert_eq!(grid.get((1, 1)), None);
        assert!(!grid.flip((5, 5), MAGENTA));
    }

    #[test]
    fn test_clear_full_rows_compacts() {
        let mut grid = Grid::new(3, 4);
        // Row 1 marker, rows 2 and 3 full.
        grid.set((0, 1), Some(MAGENTA));
        for x in 0..3 {
            grid.set((x, 2), Some(MAGENTA));
            grid.set((x, 3), Some(MAGENTA));
        }

        assert_eq!(grid.clear_full_rows(), 2);
        assert_eq!(grid.get((0, 3)), Some(MAGENTA));
        assert_eq!(grid.occupied().count(), 1);
    }

    #[test]
    fn test_occupied_reports_coordinates() {
        let mut grid = Grid::new(4, 2);
        grid.set((3, 1), Some(MAGENTA));
        let cells: Vec<_> = grid.occupied().collect();
        assert_eq!(cells, vec![((3, 1), MAGENTA)]);
    }
}
