//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and provides
//! fixed-interval repeat of held movement keys, including for terminals that
//! never report key releases.

pub mod map;
pub mod repeat;

pub use grid_arcade_types as types;

pub use map::{handle_key_event, should_quit};
pub use repeat::KeyRepeat;
