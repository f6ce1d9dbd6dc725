//! Best-score persistence seam.
//!
//! The session only keeps `best_score` in memory. Whoever hosts the session
//! loads it once at start and saves it when a `GameOver` event is drained.

use anyhow::Result;

use crate::types::SessionEvent;

pub trait ScoreStore {
    /// Best score from previous sessions, 0 if none was recorded.
    fn load_best_score(&self) -> u32;

    fn save_best_score(&mut self, score: u32) -> Result<()>;
}

/// In-memory store, for tests and headless runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryScoreStore {
    best: u32,
    saves: u32,
}

impl MemoryScoreStore {
    pub fn new(best: u32) -> Self {
        Self { best, saves: 0 }
    }

    /// How many times `save_best_score` was called.
    pub fn saves(&self) -> u32 {
        self.saves
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load_best_score(&self) -> u32 {
        self.best
    }

    fn save_best_score(&mut self, score: u32) -> Result<()> {
        self.best = self.best.max(score);
        self.saves += 1;
        Ok(())
    }
}

/// Persist the best score if `event` ends the session.
///
/// Returns whether a save happened.
pub fn persist_on_game_over<S: ScoreStore + ?Sized>(store: &mut S, event: &SessionEvent) -> Result<bool> {
    match *event {
        SessionEvent::GameOver { best_score, .. } => {
            store.save_best_score(best_score)?;
            Ok(true)
        }
        SessionEvent::ScoreRaised { .. } => Ok(false),
    }
}
