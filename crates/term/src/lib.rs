//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids widget/layout libraries and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render purely from a `GameSnapshot`, never from live session state
//! - Allow precise control over aspect ratio (several chars wide per grid column)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_crossing_core as core;
pub use tui_crossing_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
