use arrayvec::ArrayVec;

use crate::types::{DeathCause, GridPos, Terrain, WorldPos, OBSTACLES_PER_LANE};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerSnapshot {
    pub grid: GridPos,
    pub world: WorldPos,
    pub target: WorldPos,
    pub hop_height: f32,
    /// Lane the player is physically over (rounded from world z).
    pub physical_row: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LaneSnapshot {
    pub index: u32,
    pub terrain: Terrain,
    pub z: f32,
    pub direction: i8,
    pub speed: f32,
    /// Obstacle x positions; z is the lane's z.
    pub obstacles: ArrayVec<f32, OBSTACLES_PER_LANE>,
}

/// Read-only view of a session for renderers and observers.
///
/// `lanes` covers a window around the player's physical row, ordered by
/// index.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameSnapshot {
    pub player: PlayerSnapshot,
    pub hopping: bool,
    pub standing_on_log: bool,
    pub game_over: bool,
    pub death_cause: Option<DeathCause>,
    pub score: u32,
    pub best_score: u32,
    pub episode_id: u32,
    pub ticks: u64,
    pub elapsed_ms: u64,
    pub lanes: Vec<LaneSnapshot>,
}

impl GameSnapshot {
    /// Whether the session still accepts moves.
    pub fn playable(&self) -> bool {
        !self.game_over && !self.hopping
    }

    pub fn lane(&self, index: u32) -> Option<&LaneSnapshot> {
        let first = self.lanes.first()?.index;
        let offset = index.checked_sub(first)? as usize;
        self.lanes.get(offset)
    }
}
