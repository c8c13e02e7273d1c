use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Candidate, PreferenceSet};

/// Request to score one pair of preference sets
///
/// Either side may be omitted; a missing side scores 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    pub user: Option<PreferenceSet>,
    #[serde(default)]
    pub roommate: Option<PreferenceSet>,
}

/// A candidate as submitted for ranking
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankCandidate {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(default)]
    pub preferences: PreferenceSet,
}

/// Request to rank prospective roommates
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    pub user: PreferenceSet,
    #[validate(length(min = 1), nested)]
    pub candidates: Vec<RankCandidate>,
    #[serde(default)]
    pub limit: Option<u16>,
}

impl From<RankCandidate> for Candidate {
    fn from(c: RankCandidate) -> Self {
        Candidate {
            id: c.id,
            preferences: c.preferences,
        }
    }
}
