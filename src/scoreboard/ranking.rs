//! Team ordering and rank assignment
//!
//! Teams are ordered by:
//! - the sort order of their category (e.g. participants always above observers);
//! - [`score_compare`]: most points, then least total time, then the tie-breaker;
//! - team name, case-insensitively.
//!
//! Ranks are numbered per category sort order. Teams that compare equal on
//! score share a rank, so two teams on rank 3 are followed by rank 5.

use std::cmp::Ordering;

use super::TeamScore;

/// Full scoreboard ordering.
///
/// Names that only differ in case, and then identical names, fall back to
/// the exact name and the team id so that the order is total.
pub fn scoreboard_compare(a: &TeamScore, b: &TeamScore) -> Ordering {
    a.sort_order()
        .cmp(&b.sort_order())
        .then_with(|| score_compare(a, b))
        .then_with(|| cmp_ignore_ascii_case(&a.team().name, &b.team().name))
        .then_with(|| a.team().name.cmp(&b.team().name))
        .then_with(|| a.team().id.cmp(&b.team().id))
}

/// Performance ordering used both for sorting and for shared ranks.
pub fn score_compare(a: &TeamScore, b: &TeamScore) -> Ordering {
    ScoreKey::of(a).compare(&ScoreKey::of(b))
}

/// The team whose latest correct solve came first ranks higher.
///
/// Equal when either team has nothing solved.
pub fn score_tiebreaker(a: &TeamScore, b: &TeamScore) -> Ordering {
    latest_solve_compare(a.latest_solve_time(), b.latest_solve_time())
}

fn latest_solve_compare(a: Option<i64>, b: Option<i64>) -> Ordering {
    match (a, b) {
        (Some(a_latest), Some(b_latest)) => a_latest.cmp(&b_latest),
        _ => Ordering::Equal,
    }
}

/// The figures [`score_compare`] looks at, detached from the team
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreKey {
    pub number_of_points: u32,
    pub total_time: i64,
    pub latest_solve_time: Option<i64>,
}

impl ScoreKey {
    pub fn of(score: &TeamScore) -> Self {
        Self {
            number_of_points: score.number_of_points(),
            total_time: score.total_time(),
            latest_solve_time: score.latest_solve_time(),
        }
    }

    /// Most points first, then least total time, then the tie-breaker
    pub fn compare(&self, other: &Self) -> Ordering {
        other
            .number_of_points
            .cmp(&self.number_of_points)
            .then_with(|| self.total_time.cmp(&other.total_time))
            .then_with(|| latest_solve_compare(self.latest_solve_time, other.latest_solve_time))
    }
}

fn cmp_ignore_ascii_case(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

/// Sort scores into scoreboard order
pub fn sort_scores(scores: &mut [TeamScore]) {
    scores.sort_by(scoreboard_compare);
}

/// State carried from one team to the next while ranking sorted scores.
///
/// Feed it every score in scoreboard order; it remembers the previous
/// team's key and rank itself.
#[derive(Debug, Default)]
pub struct RankingState {
    sort_order: Option<i32>,
    counter: u32,
    previous: Option<(ScoreKey, u32)>,
}

impl RankingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rank of the next score in scoreboard order
    pub fn next_rank(&mut self, score: &TeamScore) -> u32 {
        let key = ScoreKey::of(score);

        if self.sort_order != Some(score.sort_order()) {
            self.sort_order = Some(score.sort_order());
            self.counter = 0;
            self.previous = None;
        }
        self.counter += 1;

        let rank = match self.previous {
            Some((previous_key, previous_rank)) if previous_key.compare(&key).is_eq() => {
                previous_rank
            }
            _ => self.counter,
        };
        self.previous = Some((key, rank));
        rank
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Team;
    use uuid::Uuid;

    fn score(id: u128, name: &str, sort_order: i32, solves: &[(u32, i64, i64)]) -> TeamScore {
        let team = Team::new(Uuid::from_u128(id), name, Uuid::from_u128(1000 + sort_order as u128));
        let mut score = TeamScore::new(team, sort_order);
        for &(points, solve_time, penalty) in solves {
            score.add_correct_solve(points, solve_time, penalty).unwrap();
        }
        score
    }

    fn rank_scores(scores: &mut [TeamScore]) {
        sort_scores(scores);

        let mut state = RankingState::new();
        for score in scores.iter_mut() {
            let rank = state.next_rank(score);
            score.set_rank(rank);
        }
    }

    fn names(scores: &[TeamScore]) -> Vec<&str> {
        scores.iter().map(|s| s.team().name.as_str()).collect()
    }

    fn ranks(scores: &[TeamScore]) -> Vec<u32> {
        scores.iter().map(TeamScore::rank).collect()
    }

    #[test]
    fn test_more_points_first() {
        let a = score(1, "a", 0, &[(1, 10, 0)]);
        let b = score(2, "b", 0, &[(1, 100, 0), (1, 100, 0)]);
        assert_eq!(score_compare(&a, &b), Ordering::Greater);
        assert_eq!(score_compare(&b, &a), Ordering::Less);
    }

    #[test]
    fn test_less_time_first() {
        let a = score(1, "a", 0, &[(1, 10, 0)]);
        let b = score(2, "b", 0, &[(1, 10, 20)]);
        assert_eq!(score_compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_tiebreaker_earlier_latest_solve_wins() {
        // Both 2 points and 50 minutes; b finished its last problem earlier
        let a = score(1, "a", 0, &[(1, 10, 0), (1, 40, 0)]);
        let b = score(2, "b", 0, &[(1, 15, 0), (1, 35, 0)]);
        assert_eq!(score_tiebreaker(&a, &b), Ordering::Greater);
        assert_eq!(score_compare(&b, &a), Ordering::Less);
    }

    #[test]
    fn test_tiebreaker_equal_without_solves() {
        let a = score(1, "a", 0, &[]);
        let b = score(2, "b", 0, &[(0, 35, 0)]);
        assert_eq!(score_tiebreaker(&a, &b), Ordering::Equal);
        assert_eq!(score_tiebreaker(&b, &a), Ordering::Equal);
    }

    #[test]
    fn test_category_before_score() {
        let strong_observer = score(1, "observer", 1, &[(3, 10, 0)]);
        let weak_participant = score(2, "participant", 0, &[]);
        assert_eq!(
            scoreboard_compare(&weak_participant, &strong_observer),
            Ordering::Less
        );
    }

    #[test]
    fn test_name_is_case_insensitive() {
        let a = score(1, "alpha", 0, &[]);
        let b = score(2, "Beta", 0, &[]);
        assert_eq!(scoreboard_compare(&a, &b), Ordering::Less);
        assert_eq!(cmp_ignore_ascii_case("ABC", "abc"), Ordering::Equal);
    }

    #[test]
    fn test_shared_rank_skips_next() {
        let mut scores = vec![
            score(1, "d", 0, &[(1, 90, 0)]),
            score(2, "b", 0, &[(2, 10, 0), (2, 20, 0)]),
            score(3, "c", 0, &[(1, 30, 0)]),
            score(4, "a", 0, &[(1, 30, 0)]),
        ];
        rank_scores(&mut scores);

        assert_eq!(names(&scores), vec!["b", "a", "c", "d"]);
        assert_eq!(ranks(&scores), vec![1, 2, 2, 4]);
    }

    #[test]
    fn test_ranks_reset_per_category() {
        let mut scores = vec![
            score(1, "obs-1", 5, &[(2, 10, 0)]),
            score(2, "team-2", 0, &[(1, 10, 0)]),
            score(3, "team-1", 0, &[(2, 10, 0)]),
            score(4, "obs-2", 5, &[(1, 10, 0)]),
        ];
        rank_scores(&mut scores);

        assert_eq!(names(&scores), vec!["team-1", "team-2", "obs-1", "obs-2"]);
        assert_eq!(ranks(&scores), vec![1, 2, 1, 2]);
    }

    #[test]
    fn test_tie_does_not_cross_categories() {
        let mut scores = vec![
            score(1, "a", 0, &[(1, 10, 0)]),
            score(2, "b", 1, &[(1, 10, 0)]),
        ];
        rank_scores(&mut scores);
        assert_eq!(ranks(&scores), vec![1, 1]);

        let mut scores = vec![
            score(1, "a", 0, &[(2, 10, 0)]),
            score(2, "b", 0, &[(1, 10, 0)]),
            score(3, "c", 1, &[(1, 10, 0)]),
            score(4, "d", 1, &[(1, 10, 0)]),
        ];
        rank_scores(&mut scores);
        assert_eq!(ranks(&scores), vec![1, 2, 1, 1]);
    }

    #[test]
    fn test_state_remembers_previous_rank_itself() {
        // Ranks are never written back, the state alone decides sharing
        let scores = vec![
            score(1, "a", 0, &[(2, 10, 0)]),
            score(2, "b", 0, &[(1, 10, 0)]),
            score(3, "c", 0, &[(1, 10, 0)]),
            score(4, "d", 0, &[(1, 10, 0)]),
            score(5, "e", 0, &[]),
            score(6, "f", 2, &[]),
        ];

        let mut state = RankingState::new();
        let ranks: Vec<u32> = scores.iter().map(|score| state.next_rank(score)).collect();

        assert_eq!(ranks, vec![1, 2, 2, 2, 5, 1]);
        assert!(scores.iter().all(|score| score.rank() == 0));
    }

    #[test]
    fn test_score_key_matches_score_compare() {
        let a = score(1, "a", 0, &[(1, 10, 0), (1, 40, 0)]);
        let b = score(2, "b", 0, &[(1, 15, 0), (1, 35, 0)]);
        assert_eq!(ScoreKey::of(&a).compare(&ScoreKey::of(&b)), score_compare(&a, &b));
        assert_eq!(ScoreKey::of(&a).latest_solve_time, Some(40));
    }

    #[test]
    fn test_everyone_tied_without_solves() {
        let mut scores = vec![
            score(1, "c", 0, &[]),
            score(2, "a", 0, &[]),
            score(3, "b", 0, &[]),
        ];
        rank_scores(&mut scores);
        assert_eq!(names(&scores), vec!["a", "b", "c"]);
        assert_eq!(ranks(&scores), vec![1, 1, 1]);
    }
}
