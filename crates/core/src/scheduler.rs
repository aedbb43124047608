//! Step scheduler - turns wall-clock time into logical turns
//!
//! Engines are driven once per frame with the current time. The scheduler
//! remembers when the last turn was due and reports how many whole
//! `move_delay` intervals have elapsed since.
//!
//! # Policies
//!
//! - [`StepPolicy::Strict`] (default): at most one turn per call. The
//!   reference time advances by exactly `move_delay`, never to `now`, so turns
//!   stay phase-aligned. Backlog after a slow frame is worked off one turn per
//!   later frame, which caps the speed under frame-rate jitter.
//! - [`StepPolicy::CatchUp`]: every elapsed interval is reported at once.
//!   After a stall the engine is immediately up to date, at the cost of
//!   several turns landing in a single frame.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepPolicy {
    #[default]
    Strict,
    CatchUp,
}

impl StepPolicy {
    /// Parse `strict` or `catch-up` (case-insensitive, `_` accepted for `-`).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "strict" => Some(StepPolicy::Strict),
            "catch-up" | "catchup" => Some(StepPolicy::CatchUp),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StepScheduler {
    last_tick: Instant,
    move_delay: Duration,
    policy: StepPolicy,
}

impl StepScheduler {
    pub fn new(now: Instant, move_delay: Duration) -> Self {
        Self {
            last_tick: now,
            move_delay,
            policy: StepPolicy::Strict,
        }
    }

    pub fn with_policy(mut self, policy: StepPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> StepPolicy {
        self.policy
    }

    pub fn move_delay(&self) -> Duration {
        self.move_delay
    }

    /// Reference time of the last turn.
    pub fn last_tick(&self) -> Instant {
        self.last_tick
    }

    /// Re-anchor on `now`, dropping any elapsed but unreported time.
    pub fn reset(&mut self, now: Instant) {
        self.last_tick = now;
    }

    /// Number of turns due at `now`; advances the reference time accordingly.
    pub fn due_steps(&mut self, now: Instant) -> u32 {
        // A zero delay would divide by zero; treat it as "every call".
        if self.move_delay.is_zero() {
            self.last_tick = now;
            return 1;
        }

        let elapsed = now.saturating_duration_since(self.last_tick);
        if elapsed < self.move_delay {
            return 0;
        }

        match self.policy {
            StepPolicy::Strict => {
                self.last_tick += self.move_delay;
                1
            }
            StepPolicy::CatchUp => {
                let steps = (elapsed.as_nanos() / self.move_delay.as_nanos()).min(u32::MAX as u128)
                    as u32;
                self.last_tick += self.move_delay * steps;
                steps
            }
        }
    }
}
