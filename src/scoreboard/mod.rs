//! Scoreboard calculation
//!
//! A [`Scoreboard`] is computed in one synchronous pass from an immutable
//! snapshot of teams, categories, problems and score cache rows:
//!
//! 1. every known score row becomes a matrix cell and is added to its team's totals;
//! 2. totals are sorted and ranked per category sort order;
//! 3. while ranking, each team's points, affiliation and cells feed the summary.
//!
//! Rows for teams or problems that are not part of the snapshot are skipped.

pub mod matrix;
pub mod penalty;
pub mod ranking;
pub mod report;
pub mod summary;
pub mod team_score;

pub use matrix::{MatrixItem, ScoreMatrix};
pub use penalty::{calc_penalty_time, score_time};
pub use ranking::{RankingState, ScoreKey, score_compare, score_tiebreaker, scoreboard_compare};
pub use report::{ReportCell, ReportRow, ScoreboardReport};
pub use summary::{ProblemSummary, Summary};
pub use team_score::TeamScore;

use std::collections::HashMap;

use crate::constants::MAX_SOLVE_TIME_SECONDS;
use crate::error::{ScoreboardError, ScoreboardResult};
use crate::models::{
    CategoryId, ContestProblem, ContestSnapshot, ProblemId, ScoreCacheRow, Team, TeamCategory,
    TeamId,
};

/// Options fixed for a whole computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringOptions {
    /// Use the restricted (jury) figures instead of the public ones
    pub restricted: bool,
    /// Penalty per wrong submission, in minutes
    pub penalty_time: u32,
    /// Track times in seconds instead of minutes
    pub score_in_seconds: bool,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        crate::config::ScoringConfig::default().options(false)
    }
}

/// A fully ranked scoreboard
#[derive(Debug, Clone)]
pub struct Scoreboard {
    teams: Vec<Team>,
    categories: Vec<TeamCategory>,
    problems: Vec<ContestProblem>,
    options: ScoringOptions,
    matrix: ScoreMatrix,
    scores: Vec<TeamScore>,
    /// Position of each team in `scores`, filled after sorting
    positions: HashMap<TeamId, usize>,
    summary: Summary,
}

impl Scoreboard {
    /// Calculate the scoreboard.
    ///
    /// Fails when a team's category is missing, when a correct row has a
    /// negative, non-finite or implausibly large solve time, or when a team's
    /// totals overflow.
    pub fn new(
        teams: Vec<Team>,
        categories: Vec<TeamCategory>,
        problems: Vec<ContestProblem>,
        score_cache: &[ScoreCacheRow],
        options: ScoringOptions,
    ) -> ScoreboardResult<Self> {
        tracing::info!(
            "Calculating scoreboard: {} teams, {} problems, {} score rows (restricted: {})",
            teams.len(),
            problems.len(),
            score_cache.len(),
            options.restricted
        );

        let mut scores = initialize_scores(&teams, &categories)?;
        let matrix = aggregate_rows(&mut scores, &problems, score_cache, options)?;

        let mut scoreboard = Self {
            teams,
            categories,
            summary: Summary::new(&problems),
            problems,
            options,
            matrix,
            scores,
            positions: HashMap::new(),
        };
        scoreboard.rank_and_summarize();

        Ok(scoreboard)
    }

    /// Calculate the scoreboard for a loaded snapshot
    pub fn from_snapshot(snapshot: ContestSnapshot, options: ScoringOptions) -> ScoreboardResult<Self> {
        let ContestSnapshot {
            teams,
            categories,
            problems,
            score_cache,
        } = snapshot;
        Self::new(teams, categories, problems, &score_cache, options)
    }

    /// Sort the scores, assign ranks and fill the summary in a single pass
    fn rank_and_summarize(&mut self) {
        ranking::sort_scores(&mut self.scores);

        let mut state = RankingState::new();
        for (index, score) in self.scores.iter_mut().enumerate() {
            let rank = state.next_rank(score);
            score.set_rank(rank);

            let team_id = score.team().id;
            self.positions.insert(team_id, index);
            self.summary.add_team(score.team(), score.number_of_points());

            for problem in &self.problems {
                let item = self.matrix.get_or_insert_default(team_id, problem.id);
                self.summary.add_cell(problem.id, score.sort_order(), item);
            }
        }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn categories(&self) -> &[TeamCategory] {
        &self.categories
    }

    pub fn problems(&self) -> &[ContestProblem] {
        &self.problems
    }

    pub fn options(&self) -> ScoringOptions {
        self.options
    }

    pub fn matrix(&self) -> &ScoreMatrix {
        &self.matrix
    }

    /// Team scores in scoreboard order, ranks assigned
    pub fn scores(&self) -> &[TeamScore] {
        &self.scores
    }

    pub fn team_score(&self, team_id: &TeamId) -> Option<&TeamScore> {
        self.positions.get(team_id).map(|&index| &self.scores[index])
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Whether the team was the first of its category to solve the problem
    pub fn is_first_to_solve(&self, team_id: &TeamId, problem_id: &ProblemId) -> bool {
        self.team_score(team_id).is_some_and(|score| {
            self.first_to_solve_in(score.sort_order(), team_id, problem_id)
        })
    }

    /// Same as [`Self::is_first_to_solve`] for a team whose sort order is known
    pub(crate) fn first_to_solve_in(
        &self,
        sort_order: i32,
        team_id: &TeamId,
        problem_id: &ProblemId,
    ) -> bool {
        let item = self.matrix.cell(team_id, problem_id);
        if !item.is_correct {
            return false;
        }

        self.summary
            .problem(problem_id)
            .and_then(|summary| summary.best_time(sort_order))
            .is_some_and(|best| item.time <= best)
    }
}

/// One empty score per team, with its category sort order resolved
fn initialize_scores(
    teams: &[Team],
    categories: &[TeamCategory],
) -> ScoreboardResult<Vec<TeamScore>> {
    let sort_orders: HashMap<CategoryId, i32> = categories
        .iter()
        .map(|category| (category.id, category.sort_order))
        .collect();

    teams
        .iter()
        .map(|team| {
            let sort_order = sort_orders.get(&team.category_id).copied().ok_or(
                ScoreboardError::UnknownCategory {
                    team_id: team.id,
                    category_id: team.category_id,
                },
            )?;
            Ok(TeamScore::new(team.clone(), sort_order))
        })
        .collect()
}

/// Build the matrix from the score cache and accumulate team totals
fn aggregate_rows(
    scores: &mut [TeamScore],
    problems: &[ContestProblem],
    score_cache: &[ScoreCacheRow],
    options: ScoringOptions,
) -> ScoreboardResult<ScoreMatrix> {
    let team_index: HashMap<TeamId, usize> = scores
        .iter()
        .enumerate()
        .map(|(index, score)| (score.team().id, index))
        .collect();
    let problem_points: HashMap<ProblemId, u32> = problems
        .iter()
        .map(|problem| (problem.id, problem.points))
        .collect();

    let mut matrix = ScoreMatrix::new();
    let mut skipped = 0usize;

    for row in score_cache {
        let (Some(&index), Some(&points)) = (
            team_index.get(&row.team_id),
            problem_points.get(&row.problem_id),
        ) else {
            tracing::debug!(
                "Skipping score row for unknown team {} or problem {}",
                row.team_id,
                row.problem_id
            );
            skipped += 1;
            continue;
        };

        let figures = row.figures(options.restricted);
        if figures.is_correct
            && !(figures.solve_time.is_finite()
                && (0.0..=MAX_SOLVE_TIME_SECONDS).contains(&figures.solve_time))
        {
            return Err(ScoreboardError::InvalidSolveTime {
                team_id: row.team_id,
                problem_id: row.problem_id,
                solve_time: figures.solve_time,
            });
        }

        let penalty = calc_penalty_time(
            figures.is_correct,
            figures.submissions,
            options.penalty_time,
            options.score_in_seconds,
        );

        let item = MatrixItem::new(
            figures.is_correct,
            figures.submissions,
            figures.pending,
            figures.solve_time,
            penalty,
        );
        if matrix.insert(row.team_id, row.problem_id, item).is_some() {
            tracing::warn!(
                "Duplicate score row for team {} on problem {}, keeping the last one",
                row.team_id,
                row.problem_id
            );
        }

        if figures.is_correct {
            let solve_time = score_time(figures.solve_time, options.score_in_seconds);
            scores[index]
                .add_correct_solve(points, solve_time, penalty)
                .ok_or(ScoreboardError::ScoreOverflow {
                    team_id: row.team_id,
                    problem_id: row.problem_id,
                })?;
        }
    }

    if skipped > 0 {
        tracing::debug!("Skipped {} score rows for unknown teams or problems", skipped);
    }

    Ok(matrix)
}
