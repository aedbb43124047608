//! Core game logic - grid model, turn timing and the two engines
//!
//! Everything here is pure and deterministic: no terminal, no I/O, no clock.
//! Time comes in as an [`Instant`](std::time::Instant) per frame and
//! randomness as any [`rand::Rng`], so a seeded [`SimpleRng`] replays a game
//! exactly.
//!
//! # Module Structure
//!
//! - [`grid`]: rectangular cell store with pixel layout and row clearing
//! - [`scheduler`]: converts elapsed time into whole turns
//! - [`queued`]: two-slot buffer for the snake's heading
//! - [`round`]: what happens between game over and the next round
//! - [`snake`] / [`tetris`]: the engines
//! - [`game`]: the [`Game`] trait the frame loop drives
//!
//! # Timing
//!
//! | Game   | Turn interval | Game over                      |
//! |--------|---------------|--------------------------------|
//! | Snake  | 250ms         | 10 blinks at 100ms, then reset |
//! | Tetris | 250ms gravity | reset on the next frame        |
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use grid_arcade_core::{Game, Grid, SimpleRng, TetrisConfig, TetrisEngine};
//!
//! let mut grid = Grid::new(10, 20);
//! let t0 = Instant::now();
//! let mut game = TetrisEngine::new(&grid, TetrisConfig::default(), SimpleRng::new(1), t0);
//!
//! let y = game.anchor().1;
//! game.propagate(t0 + Duration::from_millis(250));
//! assert_eq!(game.anchor().1, y + 1);
//!
//! grid.clear();
//! Game::draw(&game, &mut grid);
//! assert_eq!(grid.occupied().count(), 4);
//! ```

pub mod error;
pub mod game;
pub mod grid;
pub mod pieces;
pub mod queued;
pub mod rng;
pub mod round;
pub mod scheduler;
pub mod scoring;
pub mod snake;
pub mod tetris;

pub use grid_arcade_types as types;

// Re-export commonly used types for convenience
pub use error::TurnError;
pub use game::Game;
pub use grid::{Cell, CellLayout, CellRect, Grid, MAX_SIDE};
pub use pieces::{canonical_shape, Piece, PieceSet, Shape};
pub use queued::{DirectionQueue, QueuedValue};
pub use rng::SimpleRng;
pub use round::{GameOverPolicy, RoundEnd};
pub use scheduler::{StepPolicy, StepScheduler};
pub use scoring::line_clear_score;
pub use snake::{SnakeConfig, SnakeEngine};
pub use tetris::{TetrisConfig, TetrisEngine};
