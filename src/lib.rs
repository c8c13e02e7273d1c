//! Roomie Match - roommate compatibility scoring for PG and shared-room listings
//!
//! This library provides the lifestyle compatibility engine: a weighted,
//! partial-credit comparison of two people's quiz answers that yields a
//! 0-100 score and a per-attribute explanation.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{build_compatibility_details, calculate_compatibility_score, format_preference, RoommateMatcher};
pub use crate::models::{Attribute, CompatibilityDetail, CompatibilityTier, PreferenceSet};
