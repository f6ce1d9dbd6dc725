//! Best-score file: a single JSON object, replaced atomically on save.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::ScoreStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
struct BestScoreFile {
    best_score: u32,
}

/// [`ScoreStore`] backed by `{"best_score": n}` on disk.
///
/// A missing or unreadable file counts as a best score of 0.
#[derive(Debug, Clone)]
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Option<BestScoreFile> {
        let text = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&text) {
            Ok(file) => Some(file),
            Err(err) => {
                log::warn!("ignoring corrupt {}: {err}", self.path.display());
                None
            }
        }
    }
}

impl ScoreStore for JsonScoreStore {
    fn load_best_score(&self) -> u32 {
        self.read().map(|f| f.best_score).unwrap_or(0)
    }

    fn save_best_score(&mut self, score: u32) -> Result<()> {
        // Never lower a score written by another run.
        let best_score = score.max(self.load_best_score());
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        }
        let tmp = self.path.with_extension("json.tmp");
        let data = serde_json::to_vec_pretty(&BestScoreFile { best_score })?;
        fs::write(&tmp, data).with_context(|| format!("write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replace {}", self.path.display()))?;
        log::debug!("best score {} saved to {}", best_score, self.path.display());
        Ok(())
    }
}
