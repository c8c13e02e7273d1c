use serde::{Deserialize, Serialize};
use crate::models::domain::{Attribute, CompatibilityDetail, CompatibilityTier, ScoredCandidate};

/// Response for the score endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub score: u8,
    pub tier: CompatibilityTier,
    pub message: String,
}

/// Response for the details endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailsResponse {
    pub score: u8,
    pub tier: CompatibilityTier,
    pub message: String,
    pub details: Vec<CompatibilityDetail>,
}

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankResponse {
    pub matches: Vec<ScoredCandidate>,
    pub total_candidates: usize,
}

/// One quiz attribute as published to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeInfo {
    pub key: String,
    pub label: String,
    pub weight: f64,
    pub values: Vec<String>,
    pub partial_group: Option<Vec<String>>,
}

impl From<Attribute> for AttributeInfo {
    fn from(attr: Attribute) -> Self {
        Self {
            key: attr.key().to_string(),
            label: attr.label().to_string(),
            weight: attr.weight(),
            values: attr.legal_values().iter().map(|v| v.to_string()).collect(),
            partial_group: attr
                .partial_group()
                .map(|group| group.iter().map(|v| v.to_string()).collect()),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
