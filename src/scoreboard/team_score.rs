//! Running totals for one team

use serde::Serialize;

use crate::models::Team;

/// Accumulated score of a team.
///
/// Built during aggregation, then ranked once.
#[derive(Debug, Clone, Serialize)]
pub struct TeamScore {
    team: Team,
    sort_order: i32,
    number_of_points: u32,
    solve_times: Vec<i64>,
    total_solve_time: i64,
    total_time: i64,
    rank: u32,
}

impl TeamScore {
    pub(crate) fn new(team: Team, sort_order: i32) -> Self {
        Self {
            team,
            sort_order,
            number_of_points: 0,
            solve_times: Vec::new(),
            total_solve_time: 0,
            total_time: 0,
            rank: 0,
        }
    }

    pub fn team(&self) -> &Team {
        &self.team
    }

    /// Sort order of the team's category
    pub fn sort_order(&self) -> i32 {
        self.sort_order
    }

    pub fn number_of_points(&self) -> u32 {
        self.number_of_points
    }

    /// Score time of every correct problem, one entry per problem
    pub fn solve_times(&self) -> &[i64] {
        &self.solve_times
    }

    pub fn total_solve_time(&self) -> i64 {
        self.total_solve_time
    }

    /// Solve times plus penalties
    pub fn total_time(&self) -> i64 {
        self.total_time
    }

    /// Latest correct solve, if any
    pub fn latest_solve_time(&self) -> Option<i64> {
        self.solve_times.iter().copied().max()
    }

    /// Rank within the team's category, starting at 1
    pub fn rank(&self) -> u32 {
        self.rank
    }

    /// Count a correct problem worth `points`, solved at `solve_time` with
    /// `penalty` on top, both in the scoring unit.
    ///
    /// Returns `None` and leaves the totals untouched when any of them would
    /// overflow.
    pub(crate) fn add_correct_solve(&mut self, points: u32, solve_time: i64, penalty: i64) -> Option<()> {
        let number_of_points = self.number_of_points.checked_add(points)?;
        let total_solve_time = self.total_solve_time.checked_add(solve_time)?;
        let total_time = solve_time
            .checked_add(penalty)
            .and_then(|time| self.total_time.checked_add(time))?;

        self.number_of_points = number_of_points;
        self.total_solve_time = total_solve_time;
        self.total_time = total_time;
        self.solve_times.push(solve_time);
        Some(())
    }

    pub(crate) fn set_rank(&mut self, rank: u32) {
        self.rank = rank;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_accumulates_totals() {
        let team = Team::new(Uuid::from_u128(1), "Segfault", Uuid::from_u128(9));
        let mut score = TeamScore::new(team, 0);

        score.add_correct_solve(1, 30, 20).unwrap();
        score.add_correct_solve(2, 30, 0).unwrap();

        assert_eq!(score.number_of_points(), 3);
        assert_eq!(score.solve_times(), &[30, 30]);
        assert_eq!(score.total_solve_time(), 60);
        assert_eq!(score.total_time(), 80);
        assert_eq!(score.latest_solve_time(), Some(30));
    }

    #[test]
    fn test_overflow_leaves_totals_untouched() {
        let team = Team::new(Uuid::from_u128(1), "Segfault", Uuid::from_u128(9));
        let mut score = TeamScore::new(team, 0);
        score.add_correct_solve(1, 30, 0).unwrap();

        assert!(score.add_correct_solve(1, i64::MAX, 20).is_none());
        assert!(score.add_correct_solve(u32::MAX, 10, 0).is_none());

        assert_eq!(score.number_of_points(), 1);
        assert_eq!(score.solve_times(), &[30]);
        assert_eq!(score.total_time(), 30);
    }

    #[test]
    fn test_latest_solve_time_empty() {
        let team = Team::new(Uuid::from_u128(1), "Segfault", Uuid::from_u128(9));
        let score = TeamScore::new(team, 0);
        assert_eq!(score.latest_solve_time(), None);
        assert_eq!(score.rank(), 0);
    }
}
