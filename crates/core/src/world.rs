//! World module - the lazily extended lane sequence
//!
//! Lanes are appended one at a time as the score approaches the tail, so
//! there are always at least `lookahead_margin` lanes beyond the furthest row
//! reached. Lane indices are contiguous from 0 and lanes are never removed.

use crate::lane::{sample_terrain, Lane};
use crate::rng::{RandomSource, SimpleRng};
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct World<R = SimpleRng> {
    lanes: Vec<Lane>,
    tuning: Tuning,
    rng: R,
}

impl<R: RandomSource> World<R> {
    /// Create a world with the initial lookahead generated.
    pub fn new(tuning: Tuning, rng: R) -> Self {
        Self::from_lanes(Vec::new(), tuning, rng)
    }

    /// Start from pre-built lanes, then extend to the initial lookahead.
    ///
    /// # Panics
    ///
    /// Panics if the lane indices are not `0, 1, 2, ...`.
    pub fn from_lanes(lanes: Vec<Lane>, tuning: Tuning, rng: R) -> Self {
        for (i, lane) in lanes.iter().enumerate() {
            assert_eq!(lane.index() as usize, i, "lane indices must be contiguous from 0");
        }
        let mut world = Self { lanes, tuning, rng };
        world.ensure_lookahead(0);
        world
    }

    /// Append lanes until `len > score + lookahead_margin`.
    pub fn ensure_lookahead(&mut self, score: u32) {
        let wanted = score as usize + self.tuning.lookahead_margin as usize;
        while self.lanes.len() <= wanted {
            let index = self.lanes.len() as u32;
            let terrain = sample_terrain(index, &self.tuning, &mut self.rng);
            let lane = Lane::create(index, terrain, &self.tuning, &mut self.rng);
            log::debug!(
                "generated lane {} ({}, v={:.2})",
                index,
                terrain.as_str(),
                lane.velocity()
            );
            self.lanes.push(lane);
        }
    }

    /// Advance every lane's obstacles by one tick.
    pub fn tick_all(&mut self) {
        let wrap_limit = self.tuning.wrap_limit;
        for lane in self.lanes.iter_mut() {
            lane.tick(wrap_limit);
        }
    }

    /// Drop every lane and regenerate from the current random stream.
    pub fn regenerate(&mut self) {
        self.lanes.clear();
        self.ensure_lookahead(0);
    }
}

impl<R> World<R> {
    pub fn lane(&self, index: u32) -> Option<&Lane> {
        self.lanes.get(index as usize)
    }

    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }
}
