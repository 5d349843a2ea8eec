//! Custom error types and handling
//!
//! Orphaned score rows are not errors; they are skipped while the matrix is
//! built. The variants below cover input that cannot be ranked at all.

use uuid::Uuid;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum ScoreboardError {
    // Input errors
    #[error("Team {team_id} references unknown category {category_id}")]
    UnknownCategory { team_id: Uuid, category_id: Uuid },

    #[error("Invalid solve time {solve_time} for team {team_id} on problem {problem_id}")]
    InvalidSolveTime {
        team_id: Uuid,
        problem_id: Uuid,
        solve_time: f64,
    },

    #[error("Totals of team {team_id} overflow after problem {problem_id}")]
    ScoreOverflow { team_id: Uuid, problem_id: Uuid },

    // Snapshot loading errors
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ScoreboardError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCategory { .. } => "UNKNOWN_CATEGORY",
            Self::InvalidSolveTime { .. } => "INVALID_SOLVE_TIME",
            Self::ScoreOverflow { .. } => "SCORE_OVERFLOW",
            Self::Io(_) => "FILE_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}

/// Result type alias using ScoreboardError
pub type ScoreboardResult<T> = Result<T, ScoreboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = ScoreboardError::UnknownCategory {
            team_id: Uuid::nil(),
            category_id: Uuid::nil(),
        };
        assert_eq!(err.error_code(), "UNKNOWN_CATEGORY");

        let err: ScoreboardError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
