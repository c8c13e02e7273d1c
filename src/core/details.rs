use crate::core::{format::format_preference, scoring::is_wildcard};
use crate::models::{Attribute, CompatibilityDetail, PreferenceSet, NOT_SPECIFIED};

/// Build one explanation row per attribute, in declaration order
///
/// Unlike scoring, every attribute is reported even when unanswered, and
/// the match flag only honours exact and flexible/any matches. Partial
/// groups do not apply here, so a vegetarian/vegan pair
/// earns score credit but shows as a mismatch.
pub fn build_compatibility_details(
    user: &PreferenceSet,
    roommate: &PreferenceSet,
) -> Vec<CompatibilityDetail> {
    Attribute::ALL
        .iter()
        .map(|&attr| {
            let user_pref = user.get(attr).unwrap_or(NOT_SPECIFIED);
            let roommate_pref = roommate.get(attr).unwrap_or(NOT_SPECIFIED);

            // placeholders take part in the comparison, so two unanswered
            // sides read as a match
            let is_match =
                user_pref == roommate_pref || is_wildcard(user_pref) || is_wildcard(roommate_pref);

            CompatibilityDetail {
                category: attr.label().to_string(),
                is_match,
                user_pref: format_preference(user_pref),
                roommate_pref: format_preference(roommate_pref),
            }
        })
        .collect()
}

/// Details where either side may be missing entirely; missing reads as empty
pub fn details_optional(
    user: Option<&PreferenceSet>,
    roommate: Option<&PreferenceSet>,
) -> Vec<CompatibilityDetail> {
    let empty = PreferenceSet::default();
    build_compatibility_details(user.unwrap_or(&empty), roommate.unwrap_or(&empty))
}
