//! Contest snapshot
//!
//! Everything a scoreboard computation reads, as one JSON document.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ContestProblem, ScoreCacheRow, Team, TeamCategory};
use crate::error::ScoreboardResult;

/// Immutable input for one scoreboard computation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContestSnapshot {
    pub teams: Vec<Team>,
    pub categories: Vec<TeamCategory>,
    pub problems: Vec<ContestProblem>,
    #[serde(default)]
    pub score_cache: Vec<ScoreCacheRow>,
}

impl ContestSnapshot {
    /// Load a snapshot from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> ScoreboardResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a snapshot from a JSON string
    pub fn from_json(content: &str) -> ScoreboardResult<Self> {
        Ok(serde_json::from_str(content)?)
    }
}
