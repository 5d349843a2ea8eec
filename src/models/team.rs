//! Team, category and affiliation models

use serde::{Deserialize, Serialize};

use super::{AffiliationId, CategoryId, TeamId};

/// A contest team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub category_id: CategoryId,
    #[serde(default)]
    pub affiliation: Option<TeamAffiliation>,
}

/// Team category, e.g. participants, observers or organisation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamCategory {
    pub id: CategoryId,
    #[serde(default)]
    pub name: String,
    /// Lower sorts first; every distinct value is ranked on its own
    pub sort_order: i32,
}

/// Organisation a team belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAffiliation {
    pub id: AffiliationId,
    #[serde(default)]
    pub name: String,
    /// ISO 3166-1 alpha-3 country code
    #[serde(default)]
    pub country: Option<String>,
}

impl Team {
    /// Create a team without an affiliation
    pub fn new(id: TeamId, name: impl Into<String>, category_id: CategoryId) -> Self {
        Self {
            id,
            name: name.into(),
            category_id,
            affiliation: None,
        }
    }

    /// Attach an affiliation
    pub fn with_affiliation(mut self, affiliation: TeamAffiliation) -> Self {
        self.affiliation = Some(affiliation);
        self
    }
}

impl TeamCategory {
    pub fn new(id: CategoryId, name: impl Into<String>, sort_order: i32) -> Self {
        Self {
            id,
            name: name.into(),
            sort_order,
        }
    }
}

impl TeamAffiliation {
    pub fn new(id: AffiliationId, name: impl Into<String>, country: Option<&str>) -> Self {
        Self {
            id,
            name: name.into(),
            country: country.map(str::to_string),
        }
    }
}
