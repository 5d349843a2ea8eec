//! Team by problem score matrix

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{ProblemId, TeamId};

/// Result of one team on one problem
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MatrixItem {
    pub is_correct: bool,
    pub submissions: u32,
    pub pending: u32,
    /// Raw solve time in seconds since contest start
    pub time: f64,
    /// Penalty in the scoring unit
    pub penalty: i64,
}

impl MatrixItem {
    pub fn new(is_correct: bool, submissions: u32, pending: u32, time: f64, penalty: i64) -> Self {
        Self {
            is_correct,
            submissions,
            pending,
            time,
            penalty,
        }
    }
}

/// Sparse matrix keyed by team, then problem.
///
/// Absent cells read as [`MatrixItem::default`]: not correct, no submissions.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ScoreMatrix {
    rows: BTreeMap<TeamId, BTreeMap<ProblemId, MatrixItem>>,
}

impl ScoreMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a cell, returning the one it replaced
    pub(crate) fn insert(
        &mut self,
        team_id: TeamId,
        problem_id: ProblemId,
        item: MatrixItem,
    ) -> Option<MatrixItem> {
        self.rows.entry(team_id).or_default().insert(problem_id, item)
    }

    /// Materialize the default cell if nothing was stored for this pair
    pub(crate) fn get_or_insert_default(
        &mut self,
        team_id: TeamId,
        problem_id: ProblemId,
    ) -> &MatrixItem {
        self.rows
            .entry(team_id)
            .or_default()
            .entry(problem_id)
            .or_default()
    }

    /// Stored cell, if any
    pub fn get(&self, team_id: &TeamId, problem_id: &ProblemId) -> Option<&MatrixItem> {
        self.rows.get(team_id)?.get(problem_id)
    }

    /// Cell for the pair, falling back to the default cell
    pub fn cell(&self, team_id: &TeamId, problem_id: &ProblemId) -> MatrixItem {
        self.get(team_id, problem_id).copied().unwrap_or_default()
    }

    /// All stored cells of one team
    pub fn row(&self, team_id: &TeamId) -> Option<&BTreeMap<ProblemId, MatrixItem>> {
        self.rows.get(team_id)
    }

    pub fn contains_team(&self, team_id: &TeamId) -> bool {
        self.rows.contains_key(team_id)
    }

    /// Number of teams with a row
    pub fn team_count(&self) -> usize {
        self.rows.len()
    }
}
