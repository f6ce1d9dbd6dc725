//! Gameplay tuning.
//!
//! Terrain split, hitbox sizes and motion constants vary between game
//! variants, so they travel together in one value instead of being read from
//! the constants directly. [`Tuning::default`] reproduces the constants in
//! `tui_crossing_types`.

use crate::types::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    pub grid_unit: f32,
    pub lateral_bound: i32,
    pub hard_boundary: f32,

    pub hop_fraction: f32,
    pub hop_amplitude: f32,
    pub hop_epsilon: f32,

    pub safe_zone: u32,
    pub lookahead_margin: u32,
    pub road_threshold: f32,
    pub river_threshold: f32,

    pub obstacle_start_x: f32,
    pub obstacle_spacing: f32,
    pub wrap_limit: f32,
    pub speed_min: f32,
    pub speed_span: f32,

    pub road_hit_half_width: f32,
    pub log_hit_half_width: f32,
    pub hit_half_depth: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            grid_unit: GRID_UNIT,
            lateral_bound: LATERAL_BOUND,
            hard_boundary: HARD_BOUNDARY,
            hop_fraction: HOP_FRACTION,
            hop_amplitude: HOP_AMPLITUDE,
            hop_epsilon: HOP_EPSILON,
            safe_zone: SAFE_ZONE,
            lookahead_margin: LOOKAHEAD_MARGIN,
            road_threshold: ROAD_THRESHOLD,
            river_threshold: RIVER_THRESHOLD,
            obstacle_start_x: OBSTACLE_START_X,
            obstacle_spacing: OBSTACLE_SPACING,
            wrap_limit: WRAP_LIMIT,
            speed_min: LANE_SPEED_MIN,
            speed_span: LANE_SPEED_SPAN,
            road_hit_half_width: ROAD_HIT_HALF_WIDTH,
            log_hit_half_width: LOG_HIT_HALF_WIDTH,
            hit_half_depth: HIT_HALF_DEPTH,
        }
    }
}

impl Tuning {
    /// Variant with more road and less river (0.4/0.8 split).
    pub fn busy_roads() -> Self {
        Self {
            river_threshold: 0.8,
            ..Self::default()
        }
    }

    /// Half-width of the contact box along x for obstacles of `terrain`.
    pub fn hit_half_width(&self, terrain: Terrain) -> f32 {
        match terrain {
            Terrain::Road => self.road_hit_half_width,
            Terrain::River => self.log_hit_half_width,
            Terrain::Safe => 0.0,
        }
    }

    /// Lane z for a lane index.
    pub fn lane_z(&self, index: u32) -> f32 {
        -(index as f32) * self.grid_unit
    }

    /// Nearest lane row for a world z (never negative).
    pub fn row_at(&self, z: f32) -> u32 {
        (-z / self.grid_unit).round().max(0.0) as u32
    }

    /// Nearest column for a world x.
    pub fn col_at(&self, x: f32) -> i32 {
        (x / self.grid_unit).round() as i32
    }
}
