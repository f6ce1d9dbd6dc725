//! TUI Crossing (workspace facade crate).
//!
//! The game itself lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_crossing::{core,input,term,types}` and adds the
//! pieces that touch the host: command-line/env configuration and the
//! best-score file.

pub mod config;
pub mod storage;

pub use tui_crossing_core as core;
pub use tui_crossing_input as input;
pub use tui_crossing_term as term;
pub use tui_crossing_types as types;
