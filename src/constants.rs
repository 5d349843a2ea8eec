//! Application-wide constants
//!
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SCORING DEFAULTS
// =============================================================================

/// Penalty time for each wrong submission before a correct one (in minutes)
pub const DEFAULT_PENALTY_TIME_MINUTES: u32 = 20;

/// Whether scores are tracked in seconds rather than minutes by default
pub const DEFAULT_SCORE_IN_SECONDS: bool = false;

/// Largest accepted raw solve time in seconds (roughly 31,700 years).
/// Anything above is treated as corrupt input.
pub const MAX_SOLVE_TIME_SECONDS: f64 = 1.0e12;

/// Seconds per minute, used when scaling penalty and solve times
pub const SECONDS_PER_MINUTE: i64 = 60;

// =============================================================================
// LOGGING DEFAULTS
// =============================================================================

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// ENVIRONMENT VARIABLES
// =============================================================================

/// Environment variable names read by [`crate::config::Config`]
pub mod env_vars {
    pub const PENALTY_TIME: &str = "PENALTY_TIME";
    pub const SCORE_IN_SECONDS: &str = "SCORE_IN_SECONDS";
    pub const RUST_LOG: &str = "RUST_LOG";
}
