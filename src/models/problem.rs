//! Contest problem model

use serde::{Deserialize, Serialize};

use super::ProblemId;

/// A problem as used in one contest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestProblem {
    pub id: ProblemId,
    /// Short label shown in the scoreboard header, e.g. "A"
    #[serde(default)]
    pub short_name: String,
    #[serde(default = "default_points")]
    pub points: u32,
}

fn default_points() -> u32 {
    1
}

impl ContestProblem {
    pub fn new(id: ProblemId, short_name: impl Into<String>, points: u32) -> Self {
        Self {
            id,
            short_name: short_name.into(),
            points,
        }
    }
}
