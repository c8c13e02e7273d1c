// Integration tests for Roomie Match

use roomie_match::core::{build_compatibility_details, calculate_compatibility_score, RoommateMatcher};
use roomie_match::models::{Attribute, Candidate, CompatibilityTier, PreferenceSet};

fn quiz(answers: &[(&str, &str)]) -> PreferenceSet {
    let json: serde_json::Map<String, serde_json::Value> = answers
        .iter()
        .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
        .collect();
    serde_json::from_value(serde_json::Value::Object(json)).unwrap()
}

fn create_candidate(id: &str, answers: &[(&str, &str)]) -> Candidate {
    Candidate {
        id: id.to_string(),
        preferences: quiz(answers),
    }
}

#[test]
fn test_integration_end_to_end_ranking() {
    let matcher = RoommateMatcher::default();
    let user = quiz(&[
        ("foodType", "vegetarian"),
        ("sleepSchedule", "early-bird"),
        ("cleanliness", "high"),
        ("smoking", "no"),
    ]);

    let candidates = vec![
        create_candidate("twin", &[
            ("foodType", "vegetarian"),
            ("sleepSchedule", "early-bird"),
            ("cleanliness", "high"),
            ("smoking", "no"),
        ]),
        create_candidate("easygoing", &[
            ("foodType", "any"),
            ("sleepSchedule", "flexible"),
            ("cleanliness", "high"),
            ("smoking", "occasional"),
        ]),
        create_candidate("opposite", &[
            ("foodType", "non-vegetarian"),
            ("sleepSchedule", "night-owl"),
            ("cleanliness", "low"),
            ("smoking", "yes"),
        ]),
        create_candidate("newcomer", &[]),
    ];

    let result = matcher.rank(&user, candidates, 10);

    assert_eq!(result.total_candidates, 4);
    let ids: Vec<_> = result.matches.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["twin", "easygoing", "newcomer", "opposite"]);

    for i in 1..result.matches.len() {
        assert!(
            result.matches[i - 1].score >= result.matches[i].score,
            "Matches not sorted by score"
        );
    }

    assert_eq!(result.matches[0].tier, CompatibilityTier::Great);

    let easygoing = &result.matches[1];
    assert_eq!(easygoing.details[0].user_pref, "Vegetarian");
    assert_eq!(easygoing.details[0].roommate_pref, "Any");
    assert!(easygoing.details[0].is_match);
    assert!(result.matches.iter().all(|m| m.details.len() == 8));
}

#[test]
fn test_wire_format_round_trip_through_scoring() {
    // blank answers and unknown keys from older clients are tolerated
    let user = quiz(&[("foodType", "vegan"), ("pets", ""), ("budget", "low")]);
    let roommate = quiz(&[("foodType", "vegetarian"), ("pets", "allergic")]);

    assert_eq!(user.get(Attribute::Pets), None);
    assert_eq!(calculate_compatibility_score(&user, &roommate), 50);

    let details = build_compatibility_details(&user, &roommate);
    let json = serde_json::to_value(&details).unwrap();
    assert_eq!(json[0]["match"], false);
    assert_eq!(json[7]["userPref"], "Not specified");
    assert_eq!(json[7]["roommatePref"], "Allergic");
}

#[test]
fn test_unrecognized_values_never_match() {
    let user = quiz(&[("cleanliness", "spotless"), ("drinking", "no")]);
    let roommate = quiz(&[("cleanliness", "high"), ("drinking", "no")]);

    // cleanliness (0.20) in play but earns nothing, drinking (0.10) exact
    assert_eq!(calculate_compatibility_score(&user, &roommate), 33);
    assert_eq!(user.unrecognized(), vec![(Attribute::Cleanliness, "spotless")]);
}

#[test]
fn test_limit_enforcement() {
    let matcher = RoommateMatcher::default();
    let user = quiz(&[("pets", "love")]);

    let candidates: Vec<Candidate> = (0..50)
        .map(|i| create_candidate(&format!("c{:02}", i), &[("pets", if i % 2 == 0 { "love" } else { "neutral" })]))
        .collect();

    let result = matcher.rank(&user, candidates, 10);

    assert_eq!(result.matches.len(), 10);
    assert!(result.matches.iter().all(|m| m.score == 100));
    assert_eq!(result.matches[0].id, "c00");
}
