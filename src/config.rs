//! Runtime configuration from command-line flags with env fallbacks.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use directories::ProjectDirs;

use crate::types::TICK_MS;

const BEST_SCORE_FILE: &str = "best_score.json";

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about = "Endless road-and-river crossing in the terminal")]
pub struct AppConfig {
    /// Seed for lane generation (defaults to the current time).
    #[arg(long, env = "CROSSING_SEED")]
    pub seed: Option<u32>,

    /// Where the best score is kept.
    #[arg(long, env = "CROSSING_BEST_SCORE_PATH")]
    pub best_score_path: Option<PathBuf>,

    /// Fixed simulation step in milliseconds.
    #[arg(long, env = "CROSSING_TICK_MS", default_value_t = TICK_MS,
          value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub tick_ms: u32,

    /// Write logs to this file (the terminal is owned by the game).
    #[arg(long, env = "CROSSING_LOG")]
    pub log: Option<PathBuf>,
}

impl AppConfig {
    /// The configured seed, or one derived from the wall clock.
    pub fn resolved_seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }

    /// The configured best-score path, or the per-user data directory.
    pub fn resolved_best_score_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.best_score_path {
            return Ok(path.clone());
        }
        let proj = ProjectDirs::from("io", "tui-crossing", "TuiCrossing")
            .context("could not resolve project directories")?;
        Ok(proj.data_local_dir().join(BEST_SCORE_FILE))
    }
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    // Fold the high bits in so back-to-back launches still differ.
    (nanos ^ (nanos >> 32)) as u32
}
