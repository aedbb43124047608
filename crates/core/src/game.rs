//! Game trait - the surface a frame loop drives
//!
//! Both engines expose the same per-frame contract: feed decoded actions in,
//! call [`Game::propagate`] once per frame, then [`Game::draw`] into a grid.

use std::time::Instant;

use rand::Rng;

use crate::grid::Grid;
use crate::pieces::Piece;
use crate::snake::SnakeEngine;
use crate::tetris::TetrisEngine;
use crate::types::{GameAction, GameStatus};

pub trait Game {
    /// Window or panel title.
    fn title(&self) -> &'static str;

    /// Board size in cells.
    fn grid_size(&self) -> (u16, u16);

    /// Apply one input action; returns whether it changed anything.
    ///
    /// Ignored during game over. While paused only `Pause` is accepted.
    /// `Quit` belongs to the caller and is always ignored here.
    fn apply_action(&mut self, action: GameAction, now: Instant) -> bool;

    fn propagate(&mut self, now: Instant);

    fn draw(&self, grid: &mut Grid);

    fn score(&self) -> u32;

    fn paused(&self) -> bool;

    fn status(&self) -> GameStatus;

    /// Upcoming piece in the orientation it will spawn with, for games that
    /// have one.
    fn preview(&self) -> Option<Piece> {
        None
    }
}

impl<R: Rng> Game for SnakeEngine<R> {
    fn title(&self) -> &'static str {
        "SNAKE"
    }

    fn grid_size(&self) -> (u16, u16) {
        self.size()
    }

    fn apply_action(&mut self, action: GameAction, now: Instant) -> bool {
        if self.status() != GameStatus::Active {
            return false;
        }
        match action {
            GameAction::Pause => {
                self.pause_toggle(now);
                true
            }
            _ if self.paused() => false,
            GameAction::Rotate | GameAction::Quit => false,
            _ => match action.direction() {
                Some(dir) => self.set_direction(dir),
                None => false,
            },
        }
    }

    fn propagate(&mut self, now: Instant) {
        SnakeEngine::propagate(self, now)
    }

    fn draw(&self, grid: &mut Grid) {
        SnakeEngine::draw(self, grid)
    }

    fn score(&self) -> u32 {
        SnakeEngine::score(self)
    }

    fn paused(&self) -> bool {
        SnakeEngine::paused(self)
    }

    fn status(&self) -> GameStatus {
        SnakeEngine::status(self)
    }
}

impl<R: Rng> Game for TetrisEngine<R> {
    fn title(&self) -> &'static str {
        "TETRIS"
    }

    fn grid_size(&self) -> (u16, u16) {
        self.size()
    }

    fn apply_action(&mut self, action: GameAction, now: Instant) -> bool {
        if self.status() != GameStatus::Active {
            return false;
        }
        match action {
            GameAction::Pause => {
                self.pause_toggle(now);
                true
            }
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::MoveDown => self.try_move(0, 1),
            GameAction::MoveUp | GameAction::Rotate => self.try_rotate(),
            GameAction::Quit => false,
        }
    }

    fn propagate(&mut self, now: Instant) {
        TetrisEngine::propagate(self, now)
    }

    fn draw(&self, grid: &mut Grid) {
        TetrisEngine::draw(self, grid)
    }

    fn score(&self) -> u32 {
        TetrisEngine::score(self)
    }

    fn paused(&self) -> bool {
        TetrisEngine::paused(self)
    }

    fn status(&self) -> GameStatus {
        TetrisEngine::status(self)
    }

    fn preview(&self) -> Option<Piece> {
        Some(self.next_piece())
    }
}
