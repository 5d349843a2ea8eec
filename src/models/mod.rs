//! Domain models
//!
//! Input entities supplied by the surrounding judge: teams and their
//! categories and affiliations, contest problems and score cache rows.

pub mod problem;
pub mod score_cache;
pub mod snapshot;
pub mod team;

pub use problem::*;
pub use score_cache::*;
pub use snapshot::*;
pub use team::*;

use uuid::Uuid;

/// Team ID type
pub type TeamId = Uuid;

/// Team category ID type
pub type CategoryId = Uuid;

/// Team affiliation ID type
pub type AffiliationId = Uuid;

/// Problem ID type
pub type ProblemId = Uuid;
