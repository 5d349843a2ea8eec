//! Summary statistics shown below the scoreboard

use std::collections::BTreeMap;

use serde::Serialize;

use super::MatrixItem;
use crate::models::{AffiliationId, ContestProblem, ProblemId, Team};

/// Totals for one problem across all teams
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProblemSummary {
    num_submissions: u32,
    num_pending: u32,
    num_correct: u32,
    /// Fastest raw solve time per category sort order
    best_times: BTreeMap<i32, f64>,
}

impl ProblemSummary {
    pub fn num_submissions(&self) -> u32 {
        self.num_submissions
    }

    pub fn num_pending(&self) -> u32 {
        self.num_pending
    }

    pub fn num_correct(&self) -> u32 {
        self.num_correct
    }

    /// Fastest solve within one category sort order
    pub fn best_time(&self, sort_order: i32) -> Option<f64> {
        self.best_times.get(&sort_order).copied()
    }

    pub fn best_times(&self) -> &BTreeMap<i32, f64> {
        &self.best_times
    }

    pub(crate) fn add_cell(&mut self, sort_order: i32, item: &MatrixItem) {
        self.num_submissions += item.submissions;
        self.num_pending += item.pending;
        if item.is_correct {
            self.num_correct += 1;
            self.update_best_time(sort_order, item.time);
        }
    }

    fn update_best_time(&mut self, sort_order: i32, time: f64) {
        self.best_times
            .entry(sort_order)
            .and_modify(|best| *best = best.min(time))
            .or_insert(time);
    }
}

/// Scoreboard-wide totals
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    /// Only meaningful when every problem is worth the same
    number_of_points: u64,
    affiliations: BTreeMap<AffiliationId, u32>,
    countries: BTreeMap<String, u32>,
    problems: BTreeMap<ProblemId, ProblemSummary>,
}

impl Summary {
    /// Empty summary with an entry for every problem
    pub fn new(problems: &[ContestProblem]) -> Self {
        Self {
            problems: problems
                .iter()
                .map(|problem| (problem.id, ProblemSummary::default()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn number_of_points(&self) -> u64 {
        self.number_of_points
    }

    /// Number of ranked teams per affiliation
    pub fn affiliations(&self) -> &BTreeMap<AffiliationId, u32> {
        &self.affiliations
    }

    pub fn affiliation_count(&self, affiliation_id: &AffiliationId) -> u32 {
        self.affiliations.get(affiliation_id).copied().unwrap_or(0)
    }

    /// Number of ranked teams per country code
    pub fn countries(&self) -> &BTreeMap<String, u32> {
        &self.countries
    }

    pub fn country_count(&self, country: &str) -> u32 {
        self.countries.get(country).copied().unwrap_or(0)
    }

    pub fn problem(&self, problem_id: &ProblemId) -> Option<&ProblemSummary> {
        self.problems.get(problem_id)
    }

    pub fn problems(&self) -> &BTreeMap<ProblemId, ProblemSummary> {
        &self.problems
    }

    /// Count a team's points and affiliation
    pub(crate) fn add_team(&mut self, team: &Team, points: u32) {
        self.number_of_points += u64::from(points);

        if let Some(affiliation) = &team.affiliation {
            *self.affiliations.entry(affiliation.id).or_insert(0) += 1;
            if let Some(country) = &affiliation.country {
                *self.countries.entry(country.clone()).or_insert(0) += 1;
            }
        }
    }

    /// Count one team's cell on a problem
    pub(crate) fn add_cell(&mut self, problem_id: ProblemId, sort_order: i32, item: &MatrixItem) {
        self.problems
            .entry(problem_id)
            .or_default()
            .add_cell(sort_order, item);
    }
}
