//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, headless simulation).
//!
//! # World Geometry
//!
//! The world is a grid of lanes laid out along the negative z axis:
//!
//! - **Grid unit**: 40 world units per row/column step
//! - **Lane z**: `-index * GRID_UNIT` (forward decreases z)
//! - **Lateral bound**: columns `-5..=5` are reachable by moving
//! - **Hard boundary**: `|x| > 250` is out of bounds (a log may carry the
//!   player past the lateral bound briefly before this triggers)
//!
//! # Tunable Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `HOP_FRACTION` | 0.2 | Share of the remaining distance covered per tick |
//! | `HOP_AMPLITUDE` | 20 | Peak hop height |
//! | `HOP_EPSILON` | 1.0 | Distance under which a hop is finished |
//! | `SAFE_ZONE` | 4 | Lanes `0..=4` are always safe |
//! | `LOOKAHEAD_MARGIN` | 24 | Lanes kept generated beyond the score |
//! | `ROAD_THRESHOLD` | 0.4 | Draws above this become road |
//! | `RIVER_THRESHOLD` | 0.7 | Draws above this become river |
//!
//! # Examples
//!
//! ```
//! use tui_crossing_types::{Direction, GameAction, GridPos, Terrain};
//!
//! let action = GameAction::from_str("forward").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Forward));
//!
//! let pos = GridPos::ORIGIN.checked_step(Direction::Left, 5);
//! assert_eq!(pos, Some(GridPos::new(0, -1)));
//!
//! assert!(Terrain::River.is_hazard());
//! assert!(!Terrain::Safe.is_hazard());
//! ```

/// World distance of one row/column step.
pub const GRID_UNIT: f32 = 40.0;

/// Largest reachable column magnitude (columns `-5..=5`).
pub const LATERAL_BOUND: i32 = 5;

/// `|x|` beyond this is out of bounds.
pub const HARD_BOUNDARY: f32 = 250.0;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Fraction of the remaining hop distance covered each tick.
pub const HOP_FRACTION: f32 = 0.2;

/// Peak hop height in world units.
pub const HOP_AMPLITUDE: f32 = 20.0;

/// A hop is finished once the remaining distance drops under this.
pub const HOP_EPSILON: f32 = 1.0;

/// Lanes with `index <= SAFE_ZONE` are always safe.
pub const SAFE_ZONE: u32 = 4;

/// Minimum number of lanes generated beyond the score.
pub const LOOKAHEAD_MARGIN: u32 = 24;

/// Terrain draws above this threshold become road (unless river).
pub const ROAD_THRESHOLD: f32 = 0.4;

/// Terrain draws above this threshold become river.
pub const RIVER_THRESHOLD: f32 = 0.7;

/// Number of obstacles in every hazard lane.
pub const OBSTACLES_PER_LANE: usize = 3;

/// x of the first obstacle at lane creation.
pub const OBSTACLE_START_X: f32 = -400.0;

/// x spacing between obstacles at lane creation.
pub const OBSTACLE_SPACING: f32 = 350.0;

/// Obstacles past `±WRAP_LIMIT` teleport to the mirror boundary.
pub const WRAP_LIMIT: f32 = 550.0;

/// Slowest lane speed (world units per tick).
pub const LANE_SPEED_MIN: f32 = 1.2;

/// Lane speeds are drawn from `[LANE_SPEED_MIN, LANE_SPEED_MIN + LANE_SPEED_SPAN)`.
pub const LANE_SPEED_SPAN: f32 = 2.0;

/// Half-width of a car hitbox along x.
pub const ROAD_HIT_HALF_WIDTH: f32 = 30.0;

/// Half-width of a log footprint along x.
pub const LOG_HIT_HALF_WIDTH: f32 = 35.0;

/// Half-depth of every obstacle hitbox along z.
pub const HIT_HALF_DEPTH: f32 = 20.0;

/// Lanes behind the player included in a snapshot.
pub const SNAPSHOT_LANES_BEHIND: u32 = 6;

/// Lanes ahead of the player included in a snapshot.
pub const SNAPSHOT_LANES_AHEAD: u32 = 24;

/// Lane terrain.
///
/// - **Safe**: grass, nothing moves
/// - **Road**: hazard-crossable, touching a car is fatal
/// - **River**: hazard-floating, the player survives only on a log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terrain {
    Safe,
    Road,
    River,
}

impl Terrain {
    /// Whether lanes of this terrain carry moving obstacles.
    pub fn is_hazard(&self) -> bool {
        !matches!(self, Terrain::Safe)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Terrain::Safe => "safe",
            Terrain::Road => "road",
            Terrain::River => "river",
        }
    }
}

/// One of the four hop directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
}

impl Direction {
    /// Row and column delta of one step.
    pub fn delta(&self) -> (i64, i32) {
        match self {
            Direction::Forward => (1, 0),
            Direction::Backward => (-1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Game actions that can be applied to a session.
///
/// These actions are used by both human input and the headless simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Hop one cell in the given direction
    Move(Direction),
    /// Discard the session and start a fresh one
    Restart,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_crossing_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("Forward"), Some(GameAction::Move(Direction::Forward)));
    /// assert_eq!(GameAction::from_str("a"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("r"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "forward" | "up" | "w" => Some(GameAction::Move(Direction::Forward)),
            "backward" | "down" | "s" => Some(GameAction::Move(Direction::Backward)),
            "left" | "a" => Some(GameAction::Move(Direction::Left)),
            "right" | "d" => Some(GameAction::Move(Direction::Right)),
            "restart" | "r" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Forward) => "forward",
            GameAction::Move(Direction::Backward) => "backward",
            GameAction::Move(Direction::Left) => "left",
            GameAction::Move(Direction::Right) => "right",
            GameAction::Restart => "restart",
        }
    }
}

/// Logical grid coordinate: lane row and lateral column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridPos {
    pub row: u32,
    pub col: i32,
}

impl GridPos {
    pub const ORIGIN: GridPos = GridPos { row: 0, col: 0 };

    pub const fn new(row: u32, col: i32) -> Self {
        Self { row, col }
    }

    /// The position one step away, or `None` if it leaves the grid.
    pub fn checked_step(&self, dir: Direction, lateral_bound: i32) -> Option<Self> {
        let (dr, dc) = dir.delta();
        let row = self.row as i64 + dr;
        let col = self.col + dc;
        if row < 0 || col.abs() > lateral_bound {
            return None;
        }
        Some(Self {
            row: row as u32,
            col,
        })
    }
}

/// Continuous world coordinate on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldPos {
    pub x: f32,
    pub z: f32,
}

impl WorldPos {
    pub const fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    /// World position of a grid cell.
    pub fn from_grid(pos: GridPos, grid_unit: f32) -> Self {
        Self {
            x: pos.col as f32 * grid_unit,
            z: -(pos.row as f32) * grid_unit,
        }
    }

    pub fn distance(&self, other: &WorldPos) -> f32 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        (dx * dx + dz * dz).sqrt()
    }
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeathCause {
    /// Touched a car on a road lane
    HitByCar,
    /// Landed in a river lane without a log underneath
    Drowned,
    /// Drifted past the hard boundary
    OutOfBounds,
}

impl DeathCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeathCause::HitByCar => "hit_by_car",
            DeathCause::Drowned => "drowned",
            DeathCause::OutOfBounds => "out_of_bounds",
        }
    }

    /// Short human-readable description for overlays.
    pub fn describe(&self) -> &'static str {
        match self {
            DeathCause::HitByCar => "SPLAT! Hit by a car",
            DeathCause::Drowned => "SPLASH! Fell in the river",
            DeathCause::OutOfBounds => "Swept off the map",
        }
    }
}

/// Core-side event emitted by a session.
///
/// Collaborators drain it with `take_last_event` to refresh the score display
/// and persist the best score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A forward move reached a new furthest row.
    ScoreRaised { score: u32 },
    /// The session entered its terminal state.
    GameOver {
        cause: DeathCause,
        score: u32,
        best_score: u32,
    },
}
