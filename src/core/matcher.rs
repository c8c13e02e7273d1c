use crate::core::{details::build_compatibility_details, scoring::calculate_compatibility_score};
use crate::models::{Candidate, CompatibilityTier, PreferenceSet, ScoredCandidate};

/// Result of ranking a batch of candidates
#[derive(Debug)]
pub struct RankResult {
    pub matches: Vec<ScoredCandidate>,
    pub total_candidates: usize,
}

/// Ranks prospective roommates by lifestyle compatibility
///
/// # Pipeline Stages
/// 1. Score every candidate against the user's preferences
/// 2. Drop candidates below the minimum score
/// 3. Sort by score, then by id for a stable order
/// 4. Truncate to the requested limit
#[derive(Debug, Clone, Default)]
pub struct RoommateMatcher {
    min_score: u8,
}

impl RoommateMatcher {
    pub fn new(min_score: u8) -> Self {
        Self { min_score }
    }

    /// Rank `candidates` against `user`
    ///
    /// # Arguments
    /// * `user` - The current user's quiz answers
    /// * `candidates` - Prospective roommates with their answers
    /// * `limit` - Maximum number of matches to return
    pub fn rank(
        &self,
        user: &PreferenceSet,
        candidates: Vec<Candidate>,
        limit: usize,
    ) -> RankResult {
        let total_candidates = candidates.len();

        let mut matches: Vec<ScoredCandidate> = candidates
            .into_iter()
            .filter_map(|candidate| {
                let score = calculate_compatibility_score(user, &candidate.preferences);

                if score < self.min_score {
                    tracing::trace!(id = %candidate.id, score, "candidate below minimum score");
                    return None;
                }

                Some(ScoredCandidate {
                    details: build_compatibility_details(user, &candidate.preferences),
                    tier: CompatibilityTier::from_score(score),
                    id: candidate.id,
                    score,
                })
            })
            .collect();

        matches.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.id.cmp(&b.id)));
        matches.truncate(limit);

        tracing::debug!(
            "Ranked {} of {} candidates (min score {})",
            matches.len(),
            total_candidates,
            self.min_score
        );

        RankResult {
            matches,
            total_candidates,
        }
    }
}
