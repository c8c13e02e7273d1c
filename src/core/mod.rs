// Core algorithm exports
pub mod details;
pub mod format;
pub mod matcher;
pub mod scoring;

pub use details::{build_compatibility_details, details_optional};
pub use format::format_preference;
pub use matcher::{RankResult, RoommateMatcher};
pub use scoring::{attribute_credit, calculate_compatibility_score, score_optional};
