//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! Configuration is loaded once and validated before any scoreboard is computed.

use std::env;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_LOG_LEVEL, DEFAULT_PENALTY_TIME_MINUTES, DEFAULT_SCORE_IN_SECONDS, env_vars,
};
use crate::scoreboard::ScoringOptions;

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub logging: LoggingConfig,
}

/// Scoring rules shared by every scoreboard computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringConfig {
    /// Penalty per wrong submission, in minutes
    pub penalty_time_minutes: u32,
    /// Track solve and total times in seconds instead of minutes
    pub score_in_seconds: bool,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub rust_log: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            scoring: ScoringConfig::from_env()?,
            logging: LoggingConfig::from_env(),
        })
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            penalty_time_minutes: DEFAULT_PENALTY_TIME_MINUTES,
            score_in_seconds: DEFAULT_SCORE_IN_SECONDS,
        }
    }
}

impl ScoringConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            penalty_time_minutes: env::var(env_vars::PENALTY_TIME)
                .unwrap_or_else(|_| DEFAULT_PENALTY_TIME_MINUTES.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue(env_vars::PENALTY_TIME.to_string()))?,
            score_in_seconds: match env::var(env_vars::SCORE_IN_SECONDS) {
                Ok(value) => parse_bool(&value)
                    .ok_or_else(|| ConfigError::InvalidValue(env_vars::SCORE_IN_SECONDS.to_string()))?,
                Err(_) => DEFAULT_SCORE_IN_SECONDS,
            },
        })
    }

    /// Build the options for a single computation.
    ///
    /// `restricted` selects the jury figures and is decided by the caller's
    /// visibility rules.
    pub fn options(&self, restricted: bool) -> ScoringOptions {
        ScoringOptions {
            restricted,
            penalty_time: self.penalty_time_minutes,
            score_in_seconds: self.score_in_seconds,
        }
    }
}

impl LoggingConfig {
    fn from_env() -> Self {
        Self {
            rust_log: env::var(env_vars::RUST_LOG).unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
