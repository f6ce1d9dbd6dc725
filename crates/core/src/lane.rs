//! Lane module - one row of the world
//!
//! A lane has a fixed terrain and z. Hazard lanes carry [`OBSTACLES_PER_LANE`]
//! obstacles that share one direction and speed drawn at creation. Every tick
//! they slide along x and wrap to the mirror boundary once they leave the
//! field.

use arrayvec::ArrayVec;

use crate::rng::RandomSource;
use crate::tuning::Tuning;
use crate::types::{Terrain, OBSTACLES_PER_LANE};

/// A car (road) or log (river).
///
/// Only x moves; z is the owning lane's z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub x: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lane {
    index: u32,
    terrain: Terrain,
    z: f32,
    direction: i8,
    speed: f32,
    obstacles: ArrayVec<Obstacle, OBSTACLES_PER_LANE>,
}

/// Pick the terrain of lane `index` with a single uniform draw.
///
/// Lanes inside the safe zone never draw, so the random stream only depends
/// on the lanes past it.
pub fn sample_terrain<R: RandomSource + ?Sized>(index: u32, tuning: &Tuning, rng: &mut R) -> Terrain {
    if index <= tuning.safe_zone {
        return Terrain::Safe;
    }
    let roll = rng.next_unit();
    if roll > tuning.river_threshold {
        Terrain::River
    } else if roll > tuning.road_threshold {
        Terrain::Road
    } else {
        Terrain::Safe
    }
}

impl Lane {
    /// Create a lane, drawing direction and speed for hazard terrain.
    ///
    /// Obstacles start evenly spaced along x. Safe lanes consume no randomness.
    pub fn create<R: RandomSource + ?Sized>(
        index: u32,
        terrain: Terrain,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Self {
        if !terrain.is_hazard() {
            return Self::from_parts(index, terrain, 1, 0.0, &[], tuning);
        }

        let direction = rng.next_sign();
        let speed = tuning.speed_min + rng.next_unit() * tuning.speed_span;
        let mut xs = [0.0f32; OBSTACLES_PER_LANE];
        for (i, x) in xs.iter_mut().enumerate() {
            *x = tuning.obstacle_start_x + i as f32 * tuning.obstacle_spacing;
        }
        Self::from_parts(index, terrain, direction, speed, &xs, tuning)
    }

    /// Build a lane with explicit motion and obstacle positions.
    ///
    /// Extra positions beyond [`OBSTACLES_PER_LANE`] are ignored, as are all
    /// positions for safe terrain.
    pub fn from_parts(
        index: u32,
        terrain: Terrain,
        direction: i8,
        speed: f32,
        xs: &[f32],
        tuning: &Tuning,
    ) -> Self {
        let mut obstacles = ArrayVec::new();
        if terrain.is_hazard() {
            for &x in xs.iter().take(OBSTACLES_PER_LANE) {
                obstacles.push(Obstacle { x });
            }
        }
        Self {
            index,
            terrain,
            z: tuning.lane_z(index),
            direction: if direction < 0 { -1 } else { 1 },
            speed,
            obstacles,
        }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn terrain(&self) -> Terrain {
        self.terrain
    }

    pub fn z(&self) -> f32 {
        self.z
    }

    pub fn direction(&self) -> i8 {
        self.direction
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Signed x displacement of every obstacle per tick.
    pub fn velocity(&self) -> f32 {
        self.speed * self.direction as f32
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Advance every obstacle by one tick and wrap those past `wrap_limit`.
    pub fn tick(&mut self, wrap_limit: f32) {
        let velocity = self.velocity();
        let direction = self.direction;
        for obstacle in self.obstacles.iter_mut() {
            obstacle.x += velocity;
            if direction > 0 && obstacle.x > wrap_limit {
                obstacle.x = -wrap_limit;
            } else if direction < 0 && obstacle.x < -wrap_limit {
                obstacle.x = wrap_limit;
            }
        }
    }
}
