//! Serializable view of a computed scoreboard

use serde::Serialize;

use super::{Scoreboard, Summary, score_time};
use crate::models::{ContestProblem, ProblemId, TeamId};

/// Scoreboard as handed to renderers
#[derive(Debug, Clone, Serialize)]
pub struct ScoreboardReport {
    pub restricted: bool,
    pub problems: Vec<ContestProblem>,
    pub rows: Vec<ReportRow>,
    pub summary: Summary,
}

/// One team line
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub rank: u32,
    pub team_id: TeamId,
    pub team_name: String,
    pub sort_order: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub points: u32,
    pub total_time: i64,
    pub cells: Vec<ReportCell>,
}

/// One team's result on one problem
#[derive(Debug, Clone, Serialize)]
pub struct ReportCell {
    pub problem_id: ProblemId,
    pub is_correct: bool,
    pub submissions: u32,
    pub pending: u32,
    /// Solve time in the scoring unit, only set when correct
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
    pub penalty: i64,
    pub first_to_solve: bool,
}

impl Scoreboard {
    /// Flatten the scoreboard into rows in ranking order
    pub fn report(&self) -> ScoreboardReport {
        let score_in_seconds = self.options().score_in_seconds;

        let rows = self
            .scores()
            .iter()
            .map(|score| {
                let team = score.team();
                let cells = self
                    .problems()
                    .iter()
                    .map(|problem| {
                        let item = self.matrix().cell(&team.id, &problem.id);
                        ReportCell {
                            problem_id: problem.id,
                            is_correct: item.is_correct,
                            submissions: item.submissions,
                            pending: item.pending,
                            time: item
                                .is_correct
                                .then(|| score_time(item.time, score_in_seconds)),
                            penalty: item.penalty,
                            first_to_solve: self.first_to_solve_in(
                                score.sort_order(),
                                &team.id,
                                &problem.id,
                            ),
                        }
                    })
                    .collect();

                ReportRow {
                    rank: score.rank(),
                    team_id: team.id,
                    team_name: team.name.clone(),
                    sort_order: score.sort_order(),
                    affiliation: team.affiliation.as_ref().map(|a| a.name.clone()),
                    country: team
                        .affiliation
                        .as_ref()
                        .and_then(|a| a.country.clone()),
                    points: score.number_of_points(),
                    total_time: score.total_time(),
                    cells,
                }
            })
            .collect();

        ScoreboardReport {
            restricted: self.options().restricted,
            problems: self.problems().to_vec(),
            rows,
            summary: self.summary().clone(),
        }
    }
}
