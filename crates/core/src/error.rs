use thiserror::Error;

use crate::types::Pos;

/// Conditions that end a round, raised by a turn advance.
///
/// These never leave the engine: `propagate` turns them into a game-over
/// status.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnError {
    #[error("snake collided at {at:?}")]
    Collision { at: Pos },

    #[error("no room to spawn a piece at {anchor:?}")]
    GameOver { anchor: Pos },
}
