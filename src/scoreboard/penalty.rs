//! Penalty and score time calculation

use crate::constants::SECONDS_PER_MINUTE;

/// Penalty for a team on one problem.
///
/// Every submission before the first correct one costs `penalty_time`
/// minutes. Unsolved problems carry no penalty. The result is in the scoring
/// unit: seconds when `score_in_seconds` is set, minutes otherwise.
/// Saturates at `i64::MAX`; the caller rejects totals that overflow.
pub fn calc_penalty_time(
    is_correct: bool,
    submissions: u32,
    penalty_time: u32,
    score_in_seconds: bool,
) -> i64 {
    if !is_correct || submissions <= 1 {
        return 0;
    }

    let penalty = i64::from(submissions - 1).saturating_mul(i64::from(penalty_time));
    if score_in_seconds {
        penalty.saturating_mul(SECONDS_PER_MINUTE)
    } else {
        penalty
    }
}

/// Convert a raw solve time (seconds since contest start) to the scoring unit.
///
/// Partial units are truncated, so a solve at 10:59 counts as minute 10.
pub fn score_time(solve_time: f64, score_in_seconds: bool) -> i64 {
    if score_in_seconds {
        solve_time.floor() as i64
    } else {
        (solve_time / SECONDS_PER_MINUTE as f64).floor() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_penalty_when_unsolved() {
        assert_eq!(calc_penalty_time(false, 5, 20, false), 0);
        assert_eq!(calc_penalty_time(false, 0, 20, true), 0);
    }

    #[test]
    fn test_no_penalty_on_first_try() {
        assert_eq!(calc_penalty_time(true, 1, 20, false), 0);
        assert_eq!(calc_penalty_time(true, 0, 20, false), 0);
    }

    #[test]
    fn test_penalty_per_wrong_submission() {
        assert_eq!(calc_penalty_time(true, 2, 20, false), 20);
        assert_eq!(calc_penalty_time(true, 4, 20, false), 60);
        assert_eq!(calc_penalty_time(true, 3, 0, false), 0);
    }

    #[test]
    fn test_penalty_scaled_to_seconds() {
        assert_eq!(calc_penalty_time(true, 2, 20, true), 1200);
        assert_eq!(calc_penalty_time(true, 3, 5, true), 600);
    }

    #[test]
    fn test_penalty_saturates() {
        assert_eq!(calc_penalty_time(true, u32::MAX, u32::MAX, false), i64::MAX);
        assert_eq!(calc_penalty_time(true, u32::MAX, u32::MAX, true), i64::MAX);
        assert_eq!(calc_penalty_time(true, u32::MAX, 1, true), i64::from(u32::MAX - 1) * 60);
    }

    #[test]
    fn test_score_time() {
        assert_eq!(score_time(600.0, false), 10);
        assert_eq!(score_time(659.9, false), 10);
        assert_eq!(score_time(659.9, true), 659);
        assert_eq!(score_time(0.0, false), 0);
    }
}
