//! Pieces module - tetromino bitmaps and rotation
//!
//! A [`Shape`] is a small boolean occupancy matrix (at most 4x4). Rotation is
//! a pure transpose-and-reverse, so every orientation of every tetromino is
//! computed once up front into a [`PieceSet`].

use arrayvec::ArrayVec;

use crate::types::{PieceKind, Pos};

/// Largest side of a shape bitmap.
pub const MAX_SHAPE: usize = 4;

/// Occupied offsets of a shape, relative to its anchor.
pub type ShapeCells = ArrayVec<Pos, { MAX_SHAPE * MAX_SHAPE }>;

/// Boolean occupancy matrix, `bits[y][x]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    bits: [[bool; MAX_SHAPE]; MAX_SHAPE],
}

impl Shape {
    /// Build a shape from text rows; `X` marks an occupied cell.
    ///
    /// Rows longer than [`MAX_SHAPE`] or more than [`MAX_SHAPE`] rows are
    /// truncated.
    ///
    /// ```
    /// use grid_arcade_core::Shape;
    ///
    /// let t = Shape::from_rows(&[".X.", "XXX"]);
    /// assert_eq!((t.width(), t.height()), (3, 2));
    /// assert!(t.get(1, 0));
    /// assert!(!t.get(0, 0));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut bits = [[false; MAX_SHAPE]; MAX_SHAPE];
        let height = rows.len().min(MAX_SHAPE);
        let mut width = 0;
        for (y, row) in rows.iter().take(MAX_SHAPE).enumerate() {
            for (x, ch) in row.chars().take(MAX_SHAPE).enumerate() {
                bits[y][x] = ch == 'X';
                width = width.max(x + 1);
            }
        }
        Self {
            width: width as u8,
            height: height as u8,
            bits,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the cell at `(x, y)` is occupied. Outside the matrix is empty.
    pub fn get(&self, x: u8, y: u8) -> bool {
        x < self.width && y < self.height && self.bits[y as usize][x as usize]
    }

    /// Occupied offsets, row by row.
    pub fn cells(&self) -> ShapeCells {
        let mut out = ShapeCells::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.get(x, y) {
                    out.push((x as i16, y as i16));
                }
            }
        }
        out
    }

    /// The shape turned 90° clockwise.
    ///
    /// Cell `(x, y)` moves to `(height - 1 - y, x)`; width and height swap.
    pub fn rotate(&self) -> Self {
        let mut bits = [[false; MAX_SHAPE]; MAX_SHAPE];
        for y in 0..self.height as usize {
            for x in 0..self.width as usize {
                bits[x][self.height as usize - 1 - y] = self.bits[y][x];
            }
        }
        Self {
            width: self.height,
            height: self.width,
            bits,
        }
    }

    /// All four orientations, starting with `self`.
    pub fn rotations(&self) -> [Shape; 4] {
        let r1 = self.rotate();
        let r2 = r1.rotate();
        let r3 = r2.rotate();
        [*self, r1, r2, r3]
    }
}

/// Spawn orientation of each tetromino.
pub fn canonical_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows(&["..X.", "..X.", "..X.", "..X."]),
        PieceKind::O => Shape::from_rows(&["XX", "XX"]),
        PieceKind::T => Shape::from_rows(&[".X.", "XXX", "..."]),
        PieceKind::S => Shape::from_rows(&[".XX", "XX.", "..."]),
        PieceKind::Z => Shape::from_rows(&["XX.", ".XX", "..."]),
        PieceKind::J => Shape::from_rows(&["X..", "XXX", "..."]),
        PieceKind::L => Shape::from_rows(&["..X", "XXX", "..."]),
    }
}

/// A tetromino in a given orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
}

impl Piece {
    pub fn new(kind: PieceKind, shape: Shape) -> Self {
        Self { kind, shape }
    }

    /// The same piece turned 90° clockwise.
    pub fn rotated(&self) -> Self {
        Self {
            kind: self.kind,
            shape: self.shape.rotate(),
        }
    }
}

/// Every orientation of every tetromino, computed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceSet {
    rotations: [[Shape; 4]; 7],
}

impl PieceSet {
    pub fn standard() -> Self {
        Self {
            rotations: PieceKind::ALL.map(|kind| canonical_shape(kind).rotations()),
        }
    }

    pub fn shape(&self, kind: PieceKind, rotation: usize) -> Shape {
        self.rotations[kind.index()][rotation % 4]
    }

    pub fn piece(&self, kind: PieceKind, rotation: usize) -> Piece {
        Piece::new(kind, self.shape(kind, rotation))
    }
}

impl Default for PieceSet {
    fn default() -> Self {
        Self::standard()
    }
}
