//! Tetris engine - falling piece, gravity, line clears and scoring
//!
//! Settled cells live in their own [`Grid`] (`placed`); the falling piece is a
//! shape bitmap plus an anchor. Every move, rotation and spawn is checked with
//! [`TetrisEngine::collides`] before it is committed, so the falling piece
//! never overlaps settled cells or leaves the board.
//!
//! Rotation has no wall kicks: a rotation that collides in place is refused.
//!
//! # Lifecycle
//!
//! `Active` → (spawn blocked) → `GameOver` → reinit on the next frame.
//!
//! A round whose first piece does not fit starts out in `GameOver`.

use std::time::{Duration, Instant};

use log::{debug, info, trace, warn};
use rand::Rng;

use crate::error::TurnError;
use crate::grid::Grid;
use crate::pieces::{Piece, PieceSet, Shape, ShapeCells};
use crate::rng::SimpleRng;
use crate::round::{GameOverPolicy, RoundEnd};
use crate::scheduler::{StepPolicy, StepScheduler};
use crate::scoring::line_clear_score;
use crate::types::{GameStatus, PieceKind, Pos, TETRIS_MOVE_DELAY_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TetrisConfig {
    /// Gravity interval.
    pub move_delay: Duration,
    pub step_policy: StepPolicy,
    pub game_over: GameOverPolicy,
}

impl Default for TetrisConfig {
    fn default() -> Self {
        Self {
            move_delay: Duration::from_millis(TETRIS_MOVE_DELAY_MS as u64),
            step_policy: StepPolicy::Strict,
            game_over: GameOverPolicy::Immediate,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TetrisEngine<R = SimpleRng> {
    config: TetrisConfig,
    placed: Grid,
    pieces: PieceSet,
    current: Piece,
    anchor: Pos,
    next: Piece,
    score: u32,
    lines: u32,
    status: GameStatus,
    round_end: RoundEnd,
    paused: bool,
    scheduler: StepScheduler,
    rng: R,
}

impl<R: Rng> TetrisEngine<R> {
    /// Create an engine playing on a grid the size of `grid` and start a round.
    pub fn new(grid: &Grid, config: TetrisConfig, rng: R, now: Instant) -> Self {
        let (width, height) = grid.size();
        let pieces = PieceSet::standard();
        let placeholder = pieces.piece(PieceKind::O, 0);
        let scheduler =
            StepScheduler::new(now, config.move_delay).with_policy(config.step_policy);
        let round_end = RoundEnd::new(config.game_over);

        let mut engine = Self {
            config,
            placed: Grid::new(width, height),
            pieces,
            current: placeholder,
            anchor: (0, 0),
            next: placeholder,
            score: 0,
            lines: 0,
            status: GameStatus::Active,
            round_end,
            paused: false,
            scheduler,
            rng,
        };
        engine.reinit_round(now);
        engine
    }

    /// Empty the board and roll a fresh current and next piece.
    ///
    /// If the new piece collides at its spawn anchor the round is over at once.
    pub fn reinit_round(&mut self, now: Instant) {
        self.placed.clear();
        self.current = self.roll();
        self.next = self.roll();
        self.anchor = self.spawn_anchor(&self.current.shape);
        self.score = 0;
        self.lines = 0;
        self.status = GameStatus::Active;
        self.round_end.reset();
        self.paused = false;
        self.scheduler.reset(now);

        if self.collides(&self.current.shape, self.anchor) {
            warn!(
                "{:?} piece does not fit a {}x{} board",
                self.current.kind,
                self.placed.width(),
                self.placed.height()
            );
            self.status = GameStatus::GameOver;
            self.round_end.begin(now);
            return;
        }
        info!(
            "tetris round started: {}x{} board",
            self.placed.width(),
            self.placed.height()
        );
    }

    /// A uniformly random kind in a uniformly random orientation.
    fn roll(&mut self) -> Piece {
        let kind = PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())];
        let rotation = self.rng.gen_range(0..4);
        self.pieces.piece(kind, rotation)
    }

    /// Horizontally centred on the top row.
    pub fn spawn_anchor(&self, shape: &Shape) -> Pos {
        ((self.placed.width() as i16 - shape.width() as i16) / 2, 0)
    }

    /// Whether `shape` at `anchor` leaves the board or overlaps a settled cell.
    pub fn collides(&self, shape: &Shape, anchor: Pos) -> bool {
        shape
            .cells()
            .iter()
            .any(|&(dx, dy)| !self.placed.is_empty((anchor.0 + dx, anchor.1 + dy)))
    }

    fn accepts_moves(&self) -> bool {
        self.status == GameStatus::Active && !self.paused
    }

    fn shift(&mut self, dx: i16, dy: i16) -> bool {
        let anchor = (self.anchor.0 + dx, self.anchor.1 + dy);
        if self.collides(&self.current.shape, anchor) {
            return false;
        }
        self.anchor = anchor;
        true
    }

    /// Translate the falling piece; refused while paused or after game over.
    pub fn try_move(&mut self, dx: i16, dy: i16) -> bool {
        self.accepts_moves() && self.shift(dx, dy)
    }

    /// Rotate the falling piece clockwise in place.
    pub fn try_rotate(&mut self) -> bool {
        if !self.accepts_moves() {
            return false;
        }
        let rotated = self.current.rotated();
        if self.collides(&rotated.shape, self.anchor) {
            return false;
        }
        self.current = rotated;
        true
    }

    /// Run one gravity turn.
    ///
    /// A piece that cannot fall is settled, full rows are cleared and scored
    /// together, and the next piece is promoted. If the promoted piece does
    /// not fit at its spawn anchor, [`TurnError::GameOver`] is returned and
    /// the pieces are left as they were.
    pub fn advance_turn(&mut self) -> Result<(), TurnError> {
        if self.shift(0, 1) {
            trace!("piece fell to {:?}", self.anchor);
            return Ok(());
        }

        self.lock_piece();
        let cleared = self.placed.clear_full_rows() as u32;
        if cleared > 0 {
            let points = line_clear_score(cleared);
            self.lines += cleared;
            self.score += points;
            debug!("cleared {} lines for {} points", cleared, points);
        }
        self.take_next_piece()
    }

    fn lock_piece(&mut self) {
        let color = self.current.kind.color();
        for (x, y) in self.current_cells() {
            self.placed.set((x, y), Some(color));
        }
    }

    fn take_next_piece(&mut self) -> Result<(), TurnError> {
        let anchor = self.spawn_anchor(&self.next.shape);
        if self.collides(&self.next.shape, anchor) {
            return Err(TurnError::GameOver { anchor });
        }
        self.current = self.next;
        self.anchor = anchor;
        self.next = self.roll();
        Ok(())
    }

    /// Per-frame update.
    pub fn propagate(&mut self, now: Instant) {
        match self.status {
            GameStatus::Active => {
                if self.paused {
                    return;
                }
                for _ in 0..self.scheduler.due_steps(now) {
                    if let Err(err) = self.advance_turn() {
                        debug!("tetris round over: {} (score {})", err, self.score);
                        self.status = GameStatus::GameOver;
                        self.round_end.begin(self.scheduler.last_tick());
                        break;
                    }
                }
            }
            GameStatus::GameOver => {
                if self.round_end.poll(now) {
                    self.reinit_round(now);
                }
            }
        }
    }

    /// Flip the pause flag; time spent paused does not count towards gravity.
    pub fn pause_toggle(&mut self, now: Instant) {
        self.paused = !self.paused;
        self.scheduler.reset(now);
        debug!("tetris paused: {}", self.paused);
    }

    /// Paint settled cells and, while the round is live, the falling piece.
    pub fn draw(&self, grid: &mut Grid) {
        for (pos, color) in self.placed.occupied() {
            grid.set(pos, Some(color));
        }
        if self.status == GameStatus::Active {
            let color = self.current.kind.color();
            for pos in self.current_cells() {
                grid.set(pos, Some(color));
            }
        }
    }

    /// Board cells covered by the falling piece.
    pub fn current_cells(&self) -> ShapeCells {
        let (ax, ay) = self.anchor;
        self.current
            .shape
            .cells()
            .into_iter()
            .map(|(dx, dy)| (ax + dx, ay + dy))
            .collect()
    }

    pub fn placed(&self) -> &Grid {
        &self.placed
    }

    pub fn current(&self) -> Piece {
        self.current
    }

    pub fn anchor(&self) -> Pos {
        self.anchor
    }

    /// Lookahead piece.
    pub fn next_piece(&self) -> Piece {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Rows cleared this round.
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn size(&self) -> (u16, u16) {
        self.placed.size()
    }

    pub fn config(&self) -> &TetrisConfig {
        &self.config
    }
}
