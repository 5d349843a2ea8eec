//! Scoreboard - Contest Standings Calculation
//!
//! This library computes a programming-contest scoreboard from a snapshot of
//! teams, team categories, problems and per-team/per-problem score cache rows.
//!
//! # Features
//!
//! - Penalty time per wrong submission, in minutes or seconds
//! - Public or restricted (jury) figures, selected per computation
//! - Ranks numbered per category sort order, with shared ranks for ties
//! - Tie-break on the time of each team's latest correct solve
//! - Per-problem, per-affiliation and per-country summary statistics
//!
//! # Architecture
//!
//! - **Models**: input entities and the JSON contest snapshot
//! - **Scoreboard**: penalty calculation, score matrix, ranking and summary
//! - **Config**: scoring rules loaded from the environment

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod scoreboard;

// Re-export commonly used types
pub use config::Config;
pub use error::{ScoreboardError, ScoreboardResult};
pub use scoreboard::{Scoreboard, ScoringOptions};
