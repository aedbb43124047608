//! Snake engine - body, collectibles, growth and the round lifecycle
//!
//! The snake moves one cell per turn in its committed direction. Direction
//! changes requested between turns are queued and only take effect when the
//! next turn consumes them, so two quick key presses can never add up to a
//! reversal into the body.
//!
//! # Lifecycle
//!
//! `Active` → (collision) → `GameOver` → blink cycle → `reinit_round` →
//! `Active`. The restart needs no outside trigger: `propagate` keeps driving
//! the blink timer and reinitializes once it runs out.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use grid_arcade_core::{Grid, SimpleRng, SnakeConfig, SnakeEngine};
//! use grid_arcade_core::types::Direction;
//!
//! let grid = Grid::new(10, 10);
//! let t0 = Instant::now();
//! let mut snake = SnakeEngine::new(&grid, SnakeConfig::default(), SimpleRng::new(7), t0);
//!
//! assert!(snake.set_direction(Direction::Up));
//! snake.propagate(t0 + Duration::from_millis(250));
//! assert_eq!(snake.head(), (5, 4));
//! ```

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use log::{debug, info, trace, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::TurnError;
use crate::grid::Grid;
use crate::queued::DirectionQueue;
use crate::rng::SimpleRng;
use crate::round::{GameOverPolicy, RoundEnd};
use crate::scheduler::{StepPolicy, StepScheduler};
use crate::types::{
    Direction, GameStatus, Pos, COLLECTIBLE_COLOR, COLLECTIBLE_REWARD, SNAKE_COLOR,
    SNAKE_INITIAL_LENGTH, SNAKE_MOVE_DELAY_MS,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeConfig {
    /// Body length at the start of a round.
    pub length: usize,
    /// Head position at the start of a round; grid centre when `None` or off
    /// the grid.
    pub start: Option<Pos>,
    pub move_delay: Duration,
    /// Points per collectible.
    pub reward: u32,
    pub step_policy: StepPolicy,
    pub game_over: GameOverPolicy,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            length: SNAKE_INITIAL_LENGTH,
            start: None,
            move_delay: Duration::from_millis(SNAKE_MOVE_DELAY_MS as u64),
            reward: COLLECTIBLE_REWARD,
            step_policy: StepPolicy::Strict,
            game_over: GameOverPolicy::snake_blink(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SnakeEngine<R = SimpleRng> {
    width: u16,
    height: u16,
    config: SnakeConfig,
    start: Pos,
    /// Head first, tail last.
    body: VecDeque<Pos>,
    direction: DirectionQueue,
    collectibles: Vec<Pos>,
    /// Turns still owed growth (tail kept instead of dropped).
    expanding: u32,
    score: u32,
    status: GameStatus,
    round_end: RoundEnd,
    paused: bool,
    scheduler: StepScheduler,
    rng: R,
}

impl<R: Rng> SnakeEngine<R> {
    /// Create an engine playing on a grid the size of `grid` and start a round.
    pub fn new(grid: &Grid, config: SnakeConfig, rng: R, now: Instant) -> Self {
        let (width, height) = grid.size();
        let centre = (width as i16 / 2, height as i16 / 2);
        let start = match config.start {
            Some(pos) if grid.contains(pos) => pos,
            Some(pos) => {
                warn!("snake start {:?} is off the grid, using {:?}", pos, centre);
                centre
            }
            None => centre,
        };
        let scheduler =
            StepScheduler::new(now, config.move_delay).with_policy(config.step_policy);
        let round_end = RoundEnd::new(config.game_over);

        let mut engine = Self {
            width,
            height,
            config,
            start,
            body: VecDeque::new(),
            direction: DirectionQueue::new(Direction::Right),
            collectibles: Vec::new(),
            expanding: 0,
            score: 0,
            status: GameStatus::Active,
            round_end,
            paused: false,
            scheduler,
            rng,
        };
        engine.reinit_round(now);
        engine
    }

    /// Reset to a fresh round: body extending left from the start cell,
    /// heading right, one collectible, score 0.
    pub fn reinit_round(&mut self, now: Instant) {
        // Keep the initial body on the grid.
        let length = self
            .config
            .length
            .clamp(1, self.start.0.max(0) as usize + 1);
        self.body = (0..length as i16)
            .map(|i| (self.start.0 - i, self.start.1))
            .collect();
        self.direction = DirectionQueue::new(Direction::Right);
        self.expanding = 0;
        self.score = 0;
        self.collectibles.clear();
        self.place_new_collectible();
        self.status = GameStatus::Active;
        self.round_end.reset();
        self.paused = false;
        self.scheduler.reset(now);

        info!(
            "snake round started: {}x{} grid, length {}",
            self.width, self.height, length
        );
    }

    fn in_bounds(&self, (x, y): Pos) -> bool {
        x >= 0 && y >= 0 && x < self.width as i16 && y < self.height as i16
    }

    /// Put a collectible on a uniformly chosen free cell.
    ///
    /// Returns `None` when every cell is taken.
    pub fn place_new_collectible(&mut self) -> Option<Pos> {
        let (width, height) = (self.width as i16, self.height as i16);
        let free: Vec<Pos> = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .filter(|pos| !self.body.contains(pos) && !self.collectibles.contains(pos))
            .collect();

        let cell = *free.choose(&mut self.rng)?;
        self.collectibles.push(cell);
        Some(cell)
    }

    /// Queue a new heading for the next turn.
    ///
    /// Rejected (returns false) when `dir` equals the committed direction or
    /// is its exact reverse.
    pub fn set_direction(&mut self, dir: Direction) -> bool {
        let current = self.direction.observe();
        if dir == current || dir == current.opposite() {
            return false;
        }
        self.direction.set(dir);
        true
    }

    /// [`set_direction`](Self::set_direction) from a raw vector; anything
    /// other than a unit step along one axis is rejected.
    pub fn set_direction_delta(&mut self, delta: Pos) -> bool {
        Direction::from_delta(delta).is_some_and(|dir| self.set_direction(dir))
    }

    /// Run one turn.
    ///
    /// On collision nothing but the committed direction changes and
    /// [`TurnError::Collision`] is returned.
    pub fn advance_turn(&mut self) -> Result<(), TurnError> {
        let direction = self.direction.consume();
        let next = direction.step(self.head());
        let eats = self.collectibles.contains(&next);

        // The tail only frees its cell if it is dropped this turn.
        let keeps_tail = eats || self.expanding > 0;
        let solid = if keeps_tail {
            self.body.len()
        } else {
            self.body.len() - 1
        };
        if !self.in_bounds(next) || self.body.iter().take(solid).any(|&cell| cell == next) {
            return Err(TurnError::Collision { at: next });
        }

        if eats {
            self.collectibles.retain(|&cell| cell != next);
            self.expanding += 1;
            self.score += self.config.reward;
        }

        self.body.push_front(next);
        if self.expanding > 0 {
            self.expanding -= 1;
        } else {
            self.body.pop_back();
        }

        if eats {
            let placed = self.place_new_collectible();
            debug!("snake ate at {:?}, new collectible {:?}", next, placed);
        }
        trace!("snake head {:?} length {}", next, self.body.len());
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
                        debug!("snake round over: {}", err);
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

    /// Flip the pause flag; time spent paused does not count towards a turn.
    pub fn pause_toggle(&mut self, now: Instant) {
        self.paused = !self.paused;
        self.scheduler.reset(now);
        debug!("snake paused: {}", self.paused);
    }

    /// Paint the snake and collectibles. After a collision only the body is
    /// shown, on visible blink phases.
    pub fn draw(&self, grid: &mut Grid) {
        let show_body = self.status == GameStatus::Active || self.round_end.visible();
        if show_body {
            for &cell in &self.body {
                grid.set(cell, Some(SNAKE_COLOR));
            }
        }
        if self.status == GameStatus::Active {
            for &cell in &self.collectibles {
                grid.set(cell, Some(COLLECTIBLE_COLOR));
            }
        }
    }

    pub fn head(&self) -> Pos {
        self.body.front().copied().unwrap_or(self.start)
    }

    pub fn body(&self) -> &VecDeque<Pos> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Committed direction.
    pub fn direction(&self) -> Direction {
        self.direction.observe()
    }

    pub fn collectibles(&self) -> &[Pos] {
        &self.collectibles
    }

    pub fn expanding(&self) -> u32 {
        self.expanding
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn blink_visible(&self) -> bool {
        self.round_end.visible()
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }
}
