//! Grid Arcade (workspace facade crate).
//!
//! Re-exports the workspace crates as `grid_arcade::{core,input,term,types}`
//! and holds the pieces only the binary needs: environment configuration and
//! log setup.

pub mod config;
pub mod logging;

pub use grid_arcade_core as core;
pub use grid_arcade_input as input;
pub use grid_arcade_term as term;
pub use grid_arcade_types as types;
