//! Shared types and tuning constants for both games.
//!
//! Everything here is plain data with no dependencies, so the engines, the
//! input layer and the terminal view can all agree on the same vocabulary.
//!
//! # Coordinates
//!
//! Cells are addressed as `(x, y)` with `x` growing to the right and `y`
//! growing downwards. Signed components let engines compute positions that
//! fall off the grid (a snake head moving into the wall) before rejecting them.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Frame interval of the terminal loop (~60 FPS) |
//! | `SNAKE_MOVE_DELAY_MS` | 250 | Real time between two snake turns |
//! | `SNAKE_BLINK_DELAY_MS` | 100 | Interval of the game-over blink |
//! | `SNAKE_BLINKS` | 10 | Blink phases shown before the round restarts |
//! | `TETRIS_MOVE_DELAY_MS` | 250 | Gravity interval |
//! | `KEY_REPEAT_DELAY_MS` | 150 | Hold time before a movement key repeats |
//! | `KEY_REPEAT_INTERVAL_MS` | 50 | Interval between repeats |
//!
//! # Examples
//!
//! ```
//! use grid_arcade_types::{Direction, GameAction};
//!
//! assert_eq!(Direction::Right.opposite(), Direction::Left);
//! assert_eq!(Direction::from_delta((0, -1)), Some(Direction::Up));
//! assert_eq!(Direction::from_delta((1, 1)), None);
//! assert_eq!(GameAction::MoveUp.direction(), Some(Direction::Up));
//! ```

/// Grid coordinate `(x, y)`.
pub type Pos = (i16, i16);

/// Frame interval of the terminal loop in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Snake playfield width in cells
pub const SNAKE_GRID_WIDTH: u16 = 30;

/// Snake playfield height in cells
pub const SNAKE_GRID_HEIGHT: u16 = 30;

/// Body length of a freshly started snake
pub const SNAKE_INITIAL_LENGTH: usize = 3;

/// Real time between two snake turns
pub const SNAKE_MOVE_DELAY_MS: u32 = 250;

/// Interval between two blink phases after a collision
pub const SNAKE_BLINK_DELAY_MS: u32 = 100;

/// Number of blink phases before the snake round restarts
pub const SNAKE_BLINKS: u32 = 10;

/// Points awarded per collectible
pub const COLLECTIBLE_REWARD: u32 = 100;

/// Tetris playfield width in cells
pub const TETRIS_GRID_WIDTH: u16 = 10;

/// Tetris playfield height in cells
pub const TETRIS_GRID_HEIGHT: u16 = 20;

/// Gravity interval
pub const TETRIS_MOVE_DELAY_MS: u32 = 250;

/// Base of the quadratic line-clear bonus: `n * (n + 1) * LINE_CLEAR_BASE`
pub const LINE_CLEAR_BASE: u32 = 50;

/// Hold time before a movement key starts repeating
pub const KEY_REPEAT_DELAY_MS: u32 = 150;

/// Interval between repeats of a held movement key
pub const KEY_REPEAT_INTERVAL_MS: u32 = 50;

/// Digits shown in the score readout
pub const SCORE_DIGITS: usize = 8;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Color of empty grid cells.
pub const EMPTY_COLOR: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

/// Color of the lines between grid cells.
pub const BORDER_COLOR: Rgb = Rgb::new(0x40, 0x40, 0x40);

/// Color painted by the grid demo when a cell is switched on.
pub const ACTIVE_COLOR: Rgb = Rgb::new(0xFF, 0x00, 0xFF);

/// Snake body color.
pub const SNAKE_COLOR: Rgb = Rgb::new(0xFF, 0x00, 0xFF);

/// Collectible color.
pub const COLLECTIBLE_COLOR: Rgb = Rgb::new(0x00, 0xFF, 0x00);

/// One of the four unit moves on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector of this direction (`y` grows downwards).
    pub fn delta(&self) -> Pos {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Map a raw vector onto a direction.
    ///
    /// Returns `None` for anything that is not one of the four unit vectors
    /// (diagonals, zero, or longer steps).
    pub fn from_delta(delta: Pos) -> Option<Self> {
        match delta {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// `pos` moved one cell in this direction.
    pub fn step(&self, pos: Pos) -> Pos {
        let (dx, dy) = self.delta();
        (pos.0 + dx, pos.1 + dy)
    }
}

/// The seven tetromino kinds
///
/// Each kind has its own color:
/// - **I**: Cyan, straight bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Magenta, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in a fixed order used for indexing precomputed tables.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Position of this kind in [`PieceKind::ALL`].
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            PieceKind::I => Rgb::new(80, 220, 220),
            PieceKind::O => Rgb::new(240, 220, 80),
            PieceKind::T => Rgb::new(200, 120, 220),
            PieceKind::S => Rgb::new(100, 220, 120),
            PieceKind::Z => Rgb::new(220, 80, 80),
            PieceKind::J => Rgb::new(80, 120, 220),
            PieceKind::L => Rgb::new(255, 165, 0),
        }
    }
}

/// Discrete intents delivered by the input layer.
///
/// Each game decides what an action means: Snake steers with the four moves,
/// Tetris shifts with left/right/down and rotates with up or `Rotate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Rotate,
    /// Toggle pause state
    Pause,
    Quit,
}

impl GameAction {
    /// The direction carried by a move action.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveUp => Some(Direction::Up),
            GameAction::MoveDown => Some(Direction::Down),
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Round state shared by both engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_defaults() {
        assert_eq!(SNAKE_MOVE_DELAY_MS, 250);
        assert_eq!(SNAKE_BLINK_DELAY_MS, 100);
        assert_eq!(SNAKE_BLINKS, 10);
        assert_eq!(TETRIS_MOVE_DELAY_MS, 250);
        assert_eq!(COLLECTIBLE_REWARD, 100);
    }

    #[test]
    fn test_direction_opposites_cancel_out() {
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let (dx, dy) = dir.delta();
            let (ox, oy) = dir.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
            assert_eq!(Direction::from_delta(dir.delta()), Some(dir));
        }
    }

    #[test]
    fn test_from_delta_rejects_non_unit_vectors() {
        assert_eq!(Direction::from_delta((0, 0)), None);
        assert_eq!(Direction::from_delta((1, 1)), None);
        assert_eq!(Direction::from_delta((-1, 1)), None);
        assert_eq!(Direction::from_delta((2, 0)), None);
        assert_eq!(Direction::from_delta((0, -2)), None);
    }

    #[test]
    fn test_piece_kind_index_matches_all() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_only_moves_carry_a_direction() {
        assert_eq!(GameAction::MoveLeft.direction(), Some(Direction::Left));
        assert_eq!(GameAction::MoveDown.direction(), Some(Direction::Down));
        assert_eq!(GameAction::Rotate.direction(), None);
        assert_eq!(GameAction::Pause.direction(), None);
        assert_eq!(GameAction::Quit.direction(), None);
    }
}
