//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI or terminal I/O, making it:
//!
//! - **Deterministic**: Same seed and inputs produce identical games
//! - **Testable**: Scenarios can be scripted lane by lane
//! - **Portable**: Can run in any environment (terminal, headless simulator)
//!
//! # Module Structure
//!
//! - [`lane`]: one row of the world, its terrain and moving obstacles
//! - [`world`]: the lazily extended lane sequence and terrain sampling
//! - [`game_state`]: player state machine, hop interpolation, collisions
//! - [`rng`]: seedable random source for lane generation
//! - [`tuning`]: terrain split, hitboxes and motion constants
//! - [`snapshot`]: read-only view handed to renderers
//! - [`score`]: best-score persistence seam
//!
//! # Game Rules
//!
//! - **Lanes**: the first five are grass; later lanes are grass, road or
//!   river from one weighted draw each
//! - **Road**: touching a car ends the game
//! - **River**: the player must stand on a log, which carries them sideways
//! - **Score**: the furthest lane reached; never decreases
//! - **Hops**: one cell per move, no new move until the hop lands
//!
//! # Example
//!
//! ```
//! use tui_crossing_core::GameSession;
//! use tui_crossing_types::{Direction, TICK_MS};
//!
//! let mut session = GameSession::new(12345);
//! assert!(session.request_move(Direction::Forward));
//! assert_eq!(session.score(), 1);
//!
//! // A second move is ignored until the hop lands.
//! assert!(!session.request_move(Direction::Forward));
//! while session.hopping() {
//!     session.tick(TICK_MS);
//! }
//! assert!(session.accepts_input());
//! ```
//!
//! # Timing
//!
//! Call [`GameSession::tick`](game_state::GameSession::tick) once per frame.
//! Motion is defined per tick (16ms fixed step in the terminal runner).

pub mod game_state;
pub mod lane;
pub mod rng;
pub mod score;
pub mod snapshot;
pub mod tuning;
pub mod world;

pub use tui_crossing_types as types;

// Re-export commonly used types for convenience
pub use game_state::GameSession;
pub use lane::{sample_terrain, Lane, Obstacle};
pub use rng::{RandomSource, SimpleRng};
pub use score::{persist_on_game_over, MemoryScoreStore, ScoreStore};
pub use snapshot::{GameSnapshot, LaneSnapshot, PlayerSnapshot};
pub use tuning::Tuning;
pub use world::World;
