//! Held-key repeat for movement actions.
//!
//! A held move fires once on press, then again every `interval` ms after an
//! initial `delay`. Terminals that never emit key-release events are handled
//! with a timeout: a key not seen for that long counts as released.

use std::time::Instant;

use arrayvec::ArrayVec;

use crate::types::{GameAction, KEY_REPEAT_DELAY_MS, KEY_REPEAT_INTERVAL_MS};

// Without release events a single tap would otherwise stay "held" forever.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Repeated actions produced by one [`KeyRepeat::update`].
pub type RepeatActions = ArrayVec<GameAction, 32>;

#[derive(Debug, Clone)]
pub struct KeyRepeat {
    held: Option<GameAction>,
    last_key_time: Instant,
    delay_timer: u32,
    interval_accumulator: u32,
    delay: u32,
    interval: u32,
    key_release_timeout_ms: u32,
}

impl KeyRepeat {
    pub fn new(now: Instant) -> Self {
        Self::with_config(KEY_REPEAT_DELAY_MS, KEY_REPEAT_INTERVAL_MS, now)
    }

    /// `interval` is clamped to at least 1ms.
    pub fn with_config(delay: u32, interval: u32, now: Instant) -> Self {
        Self {
            held: None,
            last_key_time: now,
            delay_timer: 0,
            interval_accumulator: 0,
            delay,
            interval: interval.max(1),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Currently held movement, if any.
    pub fn held(&self) -> Option<GameAction> {
        self.held
    }

    /// Whether holding `action` should repeat it.
    pub fn repeats(action: GameAction) -> bool {
        matches!(
            action,
            GameAction::MoveLeft | GameAction::MoveRight | GameAction::MoveDown
        )
    }

    /// Register a key press.
    ///
    /// Returns the action to apply now: non-repeating actions pass straight
    /// through, a newly held move fires once, and a press of the move that is
    /// already held only refreshes the release timeout.
    pub fn press(&mut self, action: GameAction, now: Instant) -> Option<GameAction> {
        if !Self::repeats(action) {
            return Some(action);
        }
        self.last_key_time = now;
        if self.held == Some(action) {
            None
        } else {
            self.held = Some(action);
            self.delay_timer = 0;
            self.interval_accumulator = 0;
            Some(action)
        }
    }

    pub fn release(&mut self, action: GameAction) {
        if self.held == Some(action) {
            self.clear_held();
        }
    }

    fn clear_held(&mut self) {
        self.held = None;
        self.delay_timer = 0;
        self.interval_accumulator = 0;
    }

    /// Advance the timers by `elapsed_ms` and collect the repeats now due.
    pub fn update(&mut self, elapsed_ms: u32, now: Instant) -> RepeatActions {
        let mut actions = RepeatActions::new();

        let since_last_key = now.saturating_duration_since(self.last_key_time).as_millis();
        if self.held.is_some() && since_last_key > self.key_release_timeout_ms as u128 {
            self.clear_held();
        }

        let Some(action) = self.held else {
            return actions;
        };

        let prev = self.delay_timer;
        self.delay_timer = self.delay_timer.saturating_add(elapsed_ms);
        if self.delay_timer >= self.delay {
            let excess = if prev < self.delay {
                self.delay_timer - self.delay
            } else {
                elapsed_ms
            };
            self.interval_accumulator = self.interval_accumulator.saturating_add(excess);

            while self.interval_accumulator >= self.interval {
                let _ = actions.try_push(action);
                self.interval_accumulator -= self.interval;
            }
        }

        actions
    }

    pub fn reset(&mut self, now: Instant) {
        self.clear_held();
        self.last_key_time = now;
    }
}
