//! Score cache model
//!
//! One row per team and problem with any activity. Every figure exists in a
//! public variant and a restricted variant; the restricted one includes
//! submissions hidden from the public, e.g. during a freeze.

use serde::{Deserialize, Serialize};

use super::{ProblemId, TeamId};

/// Figures for one team on one problem, as seen by one audience
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreFigures {
    pub is_correct: bool,
    pub submissions: u32,
    pub pending: u32,
    /// Seconds since contest start of the first correct submission
    pub solve_time: f64,
}

/// Score cache row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreCacheRow {
    pub team_id: TeamId,
    pub problem_id: ProblemId,
    pub public: ScoreFigures,
    pub restricted: ScoreFigures,
}

impl ScoreCacheRow {
    /// Row whose public and restricted figures agree
    pub fn new(team_id: TeamId, problem_id: ProblemId, figures: ScoreFigures) -> Self {
        Self {
            team_id,
            problem_id,
            public: figures,
            restricted: figures,
        }
    }

    /// Select the variant used for this computation
    pub fn figures(&self, restricted: bool) -> &ScoreFigures {
        if restricted {
            &self.restricted
        } else {
            &self.public
        }
    }
}

impl ScoreFigures {
    /// A correct result after `submissions` tries, solved at `solve_time` seconds
    pub fn correct(submissions: u32, solve_time: f64) -> Self {
        Self {
            is_correct: true,
            submissions,
            pending: 0,
            solve_time,
        }
    }

    /// Only incorrect or pending submissions so far
    pub fn unsolved(submissions: u32, pending: u32) -> Self {
        Self {
            is_correct: false,
            submissions,
            pending,
            solve_time: 0.0,
        }
    }
}
