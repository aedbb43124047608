//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: a core [`Grid`](crate::core::Grid)
//! is drawn into a plain framebuffer, which is then diffed against the
//! previous frame and flushed to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)
//! - Report where cells land on screen so mouse input can be mapped back

pub mod fb;
pub mod grid_view;
pub mod renderer;

pub use grid_arcade_core as core;
pub use grid_arcade_types as types;

pub use fb::{FrameBuffer, Glyph, Style};
pub use grid_view::{GridView, PanelInfo, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
