use crate::models::{Attribute, MatchCredit, PreferenceSet, ANY, FLEXIBLE};

/// Calculate a compatibility score (0-100) between two preference sets
///
/// Scoring formula:
/// score = round(
///     sum(weight * credit) / sum(weight) * 100
/// )
/// where only attributes answered on both sides take part, and credit is
///     1.0  identical answers
///     0.7  either side answered "flexible" or "any"
///     0.5  both answers in the attribute's partial-compatibility group
///     0.0  otherwise
///
/// Returns 0 when no attribute is answered on both sides.
pub fn calculate_compatibility_score(user: &PreferenceSet, roommate: &PreferenceSet) -> u8 {
    let mut earned: u32 = 0;
    let mut in_play: u32 = 0;

    for attr in Attribute::ALL {
        let (Some(a), Some(b)) = (user.get(attr), roommate.get(attr)) else {
            continue;
        };

        let weight = attr.weight_bp();
        in_play += weight;
        earned += weight * credit_for(attr, a, b).percent();
    }

    if in_play == 0 {
        return 0;
    }

    // earned is in basis-point-percent, so earned / in_play is already a
    // percentage; round half up in integer space
    let score = (2 * earned + in_play) / (2 * in_play);

    tracing::trace!(score, in_play, earned, "compatibility score computed");

    score.min(100) as u8
}

/// Score two preference sets where either may be missing entirely
///
/// A missing set (as opposed to an empty one) short-circuits to 0.
pub fn score_optional(user: Option<&PreferenceSet>, roommate: Option<&PreferenceSet>) -> u8 {
    match (user, roommate) {
        (Some(u), Some(r)) => calculate_compatibility_score(u, r),
        _ => 0,
    }
}

/// Credit a single attribute earns, or `None` if either side is unanswered
pub fn attribute_credit(
    attr: Attribute,
    user: &PreferenceSet,
    roommate: &PreferenceSet,
) -> Option<MatchCredit> {
    match (user.get(attr), roommate.get(attr)) {
        (Some(a), Some(b)) => Some(credit_for(attr, a, b)),
        _ => None,
    }
}

/// Apply the exact / flexible / partial / none policy, in that priority
#[inline]
fn credit_for(attr: Attribute, a: &str, b: &str) -> MatchCredit {
    if a == b {
        return MatchCredit::Exact;
    }

    if is_wildcard(a) || is_wildcard(b) {
        return MatchCredit::Flexible;
    }

    match attr.partial_group() {
        Some(group) if in_group(group, a) && in_group(group, b) => MatchCredit::Partial,
        _ => MatchCredit::None,
    }
}

#[inline]
fn in_group(group: &[&str], value: &str) -> bool {
    group.iter().any(|member| *member == value)
}

#[inline]
pub(crate) fn is_wildcard(value: &str) -> bool {
    value == FLEXIBLE || value == ANY
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs(pairs: &[(Attribute, &str)]) -> PreferenceSet {
        pairs
            .iter()
            .fold(PreferenceSet::new(), |p, (attr, v)| p.with(*attr, *v))
    }

    #[test]
    fn test_exact_beats_wildcard() {
        assert_eq!(credit_for(Attribute::SleepSchedule, "flexible", "flexible"), MatchCredit::Exact);
        assert_eq!(credit_for(Attribute::FoodType, "any", "vegan"), MatchCredit::Flexible);
    }

    #[test]
    fn test_wildcard_applies_to_any_attribute() {
        // "any" is only offered for food, but the override is not keyed by attribute
        assert_eq!(credit_for(Attribute::Pets, "any", "allergic"), MatchCredit::Flexible);
        assert_eq!(credit_for(Attribute::Cleanliness, "high", "flexible"), MatchCredit::Flexible);
    }

    #[test]
    fn test_partial_groups() {
        assert_eq!(credit_for(Attribute::FoodType, "vegetarian", "vegan"), MatchCredit::Partial);
        assert_eq!(credit_for(Attribute::SocialLevel, "moderate", "very-social"), MatchCredit::Partial);
        assert_eq!(credit_for(Attribute::Smoking, "occasional", "no"), MatchCredit::Partial);
        assert_eq!(credit_for(Attribute::Drinking, "social", "no"), MatchCredit::Partial);

        assert_eq!(credit_for(Attribute::FoodType, "vegan", "non-vegetarian"), MatchCredit::None);
        assert_eq!(credit_for(Attribute::Drinking, "yes", "social"), MatchCredit::None);
    }

    #[test]
    fn test_no_partial_group_for_other_attributes() {
        assert_eq!(credit_for(Attribute::Cleanliness, "high", "medium"), MatchCredit::None);
        assert_eq!(credit_for(Attribute::Pets, "love", "neutral"), MatchCredit::None);
    }

    #[test]
    fn test_unknown_values_fall_through() {
        assert_eq!(credit_for(Attribute::FoodType, "pescatarian", "vegan"), MatchCredit::None);
    }

    #[test]
    fn test_unanswered_attributes_do_not_dilute() {
        // one mismatch in play plus an exact match; unanswered pets is ignored
        let a = prefs(&[(Attribute::Smoking, "no"), (Attribute::Drinking, "yes"), (Attribute::Pets, "love")]);
        let b = prefs(&[(Attribute::Smoking, "no"), (Attribute::Drinking, "no")]);

        assert_eq!(calculate_compatibility_score(&a, &b), 50);
        assert_eq!(attribute_credit(Attribute::Pets, &a, &b), None);
    }

    #[test]
    fn test_round_half_up() {
        // 0.7 * 0.05 / (0.05 + 0.20) = 14%, cleanliness mismatch
        let a = prefs(&[(Attribute::Pets, "flexible"), (Attribute::Cleanliness, "high")]);
        let b = prefs(&[(Attribute::Pets, "love"), (Attribute::Cleanliness, "low")]);
        assert_eq!(calculate_compatibility_score(&a, &b), 14);

        // (0.5 * 0.15 + 0.05) / 0.20 = 62.5% exactly
        let a = prefs(&[(Attribute::FoodType, "vegetarian"), (Attribute::Pets, "love")]);
        let b = prefs(&[(Attribute::FoodType, "vegan"), (Attribute::Pets, "love")]);
        assert_eq!(calculate_compatibility_score(&a, &b), 63);
    }

    #[test]
    fn test_half_boundary_rounds_up_without_float_drift() {
        // (0.20 + 0.5 * 0.10 + 0.10) / 0.40 = 87.5% exactly
        let a = prefs(&[
            (Attribute::Cleanliness, "high"),
            (Attribute::Smoking, "occasional"),
            (Attribute::Drinking, "no"),
        ]);
        let b = prefs(&[
            (Attribute::Cleanliness, "high"),
            (Attribute::Smoking, "no"),
            (Attribute::Drinking, "no"),
        ]);
        assert_eq!(calculate_compatibility_score(&a, &b), 88);
    }

    #[test]
    fn test_score_optional() {
        let a = prefs(&[(Attribute::Pets, "love")]);
        assert_eq!(score_optional(Some(&a), None), 0);
        assert_eq!(score_optional(None, Some(&a)), 0);
        assert_eq!(score_optional(Some(&a), Some(&a)), 100);
    }
}
