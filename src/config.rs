//! Runtime configuration from the environment and command line.
//!
//! | Variable                 | Meaning                                 |
//! |--------------------------|-----------------------------------------|
//! | `ARCADE_SEED`            | RNG seed (`u32`); random when unset     |
//! | `ARCADE_SNAKE_DELAY_MS`  | Snake turn interval                     |
//! | `ARCADE_TETRIS_DELAY_MS` | Tetris gravity interval                 |
//! | `ARCADE_STEP_POLICY`     | `strict` or `catch-up`                  |
//! | `ARCADE_LOG_PATH`        | Log file; temp dir when unset           |
//! | `ARCADE_DEBUG`           | `1`/`true` enables debug logging        |
//!
//! Unparseable values fall back to the defaults.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};

use crate::core::{SnakeConfig, StepPolicy, TetrisConfig};
use crate::logging::default_log_path;
use crate::types::{SNAKE_MOVE_DELAY_MS, TETRIS_MOVE_DELAY_MS};

/// Which game the binary runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameChoice {
    #[default]
    Snake,
    Tetris,
    /// Click-to-toggle grid demo.
    Grid,
}

impl GameChoice {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "snake" => Some(GameChoice::Snake),
            "tetris" => Some(GameChoice::Tetris),
            "grid" => Some(GameChoice::Grid),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameChoice::Snake => "snake",
            GameChoice::Tetris => "tetris",
            GameChoice::Grid => "grid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArcadeConfig {
    pub game: GameChoice,
    pub seed: u32,
    pub snake_delay_ms: u32,
    pub tetris_delay_ms: u32,
    pub step_policy: StepPolicy,
    pub log_path: PathBuf,
    pub debug: bool,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            game: GameChoice::default(),
            seed: 1,
            snake_delay_ms: SNAKE_MOVE_DELAY_MS,
            tetris_delay_ms: TETRIS_MOVE_DELAY_MS,
            step_policy: StepPolicy::default(),
            log_path: default_log_path(),
            debug: false,
        }
    }
}

impl ArcadeConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup; `from_env` uses the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("ARCADE_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(rand::random);

        let snake_delay_ms = lookup("ARCADE_SNAKE_DELAY_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.snake_delay_ms);

        let tetris_delay_ms = lookup("ARCADE_TETRIS_DELAY_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.tetris_delay_ms);

        let step_policy = lookup("ARCADE_STEP_POLICY")
            .and_then(|s| StepPolicy::from_str(&s))
            .unwrap_or(defaults.step_policy);

        let log_path = lookup("ARCADE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) })
            .unwrap_or(defaults.log_path);

        let debug = lookup("ARCADE_DEBUG")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Self {
            game: defaults.game,
            seed,
            snake_delay_ms,
            tetris_delay_ms,
            step_policy,
            log_path,
            debug,
        }
    }

    /// Apply command-line arguments (program name already skipped).
    ///
    /// The only argument is the game to run.
    pub fn with_args<I, S>(mut self, args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();
        if let Some(arg) = args.next() {
            let arg = arg.as_ref();
            match GameChoice::from_str(arg) {
                Some(game) => self.game = game,
                None => bail!("unknown game {:?}; expected snake, tetris or grid", arg),
            }
        }
        if let Some(extra) = args.next() {
            bail!("unexpected argument {:?}", extra.as_ref());
        }
        Ok(self)
    }

    pub fn snake_config(&self) -> SnakeConfig {
        SnakeConfig {
            move_delay: Duration::from_millis(self.snake_delay_ms as u64),
            step_policy: self.step_policy,
            ..SnakeConfig::default()
        }
    }

    pub fn tetris_config(&self) -> TetrisConfig {
        TetrisConfig {
            move_delay: Duration::from_millis(self.tetris_delay_ms as u64),
            step_policy: self.step_policy,
            ..TetrisConfig::default()
        }
    }
}
