//! End-of-round handling.
//!
//! What happens after a round is lost is a per-engine policy: Snake blinks
//! its body for a while before restarting on its own, Tetris restarts on the
//! very next frame. [`RoundEnd`] runs the chosen policy and tells the engine
//! when to reinitialize.

use std::time::{Duration, Instant};

use crate::scheduler::StepScheduler;
use crate::types::{SNAKE_BLINKS, SNAKE_BLINK_DELAY_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverPolicy {
    /// Restart on the first poll after the round ends.
    Immediate,
    /// Toggle visibility every `delay`, restart once `blinks` phases were shown.
    Blink { delay: Duration, blinks: u32 },
}

impl GameOverPolicy {
    /// Snake's default: ten 100ms blink phases.
    pub fn snake_blink() -> Self {
        GameOverPolicy::Blink {
            delay: Duration::from_millis(SNAKE_BLINK_DELAY_MS as u64),
            blinks: SNAKE_BLINKS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RoundEnd {
    policy: GameOverPolicy,
    timer: Option<StepScheduler>,
    visible: bool,
    blinks_made: u32,
}

impl RoundEnd {
    pub fn new(policy: GameOverPolicy) -> Self {
        Self {
            policy,
            timer: None,
            visible: true,
            blinks_made: 0,
        }
    }

    pub fn policy(&self) -> GameOverPolicy {
        self.policy
    }

    /// Start the policy; `since` is the time the fatal turn was due.
    pub fn begin(&mut self, since: Instant) {
        self.visible = true;
        self.blinks_made = 0;
        self.timer = match self.policy {
            GameOverPolicy::Immediate => None,
            GameOverPolicy::Blink { delay, .. } => Some(StepScheduler::new(since, delay)),
        };
    }

    /// Advance the policy; returns true when the round should be reinitialized.
    pub fn poll(&mut self, now: Instant) -> bool {
        let GameOverPolicy::Blink { blinks, .. } = self.policy else {
            return true;
        };
        let Some(timer) = self.timer.as_mut() else {
            return true;
        };

        for _ in 0..timer.due_steps(now) {
            if self.blinks_made >= blinks {
                return true;
            }
            self.visible = !self.visible;
            self.blinks_made += 1;
        }
        false
    }

    /// Whether the lost round should currently be drawn.
    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn blinks_made(&self) -> u32 {
        self.blinks_made
    }

    pub fn reset(&mut self) {
        self.timer = None;
        self.visible = true;
        self.blinks_made = 0;
    }
}
