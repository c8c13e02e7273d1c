// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Attribute, Candidate, CompatibilityDetail, CompatibilityTier, MatchCredit, PreferenceSet,
    ScoredCandidate, ANY, FLEXIBLE, NOT_SPECIFIED,
};
pub use requests::{CompareRequest, RankCandidate, RankRequest};
pub use responses::{AttributeInfo, DetailsResponse, ErrorResponse, HealthResponse, RankResponse, ScoreResponse};
