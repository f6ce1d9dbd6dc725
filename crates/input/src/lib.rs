//! Terminal input module (session-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and drops moves the
//! session could not take anyway, so a held key never queues hops.

pub mod map;

pub use tui_crossing_types as types;

pub use map::{gated_action, handle_key_event, should_quit};
