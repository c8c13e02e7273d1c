use serde::{Deserialize, Serialize};

/// Placeholder shown for a preference the user has not answered yet
pub const NOT_SPECIFIED: &str = "Not specified";

/// Sentinel answer meaning "no strong preference"
pub const FLEXIBLE: &str = "flexible";

/// Sentinel answer meaning "anything goes" (food)
pub const ANY: &str = "any";

const FOOD_PARTIAL: &[&str] = &["vegetarian", "vegan"];
const SOCIAL_PARTIAL: &[&str] = &["very-social", "moderate"];
const SMOKING_PARTIAL: &[&str] = &["no", "occasional"];
const DRINKING_PARTIAL: &[&str] = &["no", "social"];

/// Lifestyle attribute tracked by the compatibility quiz
///
/// Variants are declared in the fixed order used for detail rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Attribute {
    FoodType,
    SleepSchedule,
    StudyHabits,
    Cleanliness,
    SocialLevel,
    Smoking,
    Drinking,
    Pets,
}

impl Attribute {
    pub const ALL: [Attribute; 8] = [
        Attribute::FoodType,
        Attribute::SleepSchedule,
        Attribute::StudyHabits,
        Attribute::Cleanliness,
        Attribute::SocialLevel,
        Attribute::Smoking,
        Attribute::Drinking,
        Attribute::Pets,
    ];

    /// Wire key as it appears in quiz answers
    pub fn key(self) -> &'static str {
        match self {
            Attribute::FoodType => "foodType",
            Attribute::SleepSchedule => "sleepSchedule",
            Attribute::StudyHabits => "studyHabits",
            Attribute::Cleanliness => "cleanliness",
            Attribute::SocialLevel => "socialLevel",
            Attribute::Smoking => "smoking",
            Attribute::Drinking => "drinking",
            Attribute::Pets => "pets",
        }
    }

    /// Human-readable category name
    pub fn label(self) -> &'static str {
        match self {
            Attribute::FoodType => "Food Preference",
            Attribute::SleepSchedule => "Sleep Schedule",
            Attribute::StudyHabits => "Study Habits",
            Attribute::Cleanliness => "Cleanliness",
            Attribute::SocialLevel => "Social Level",
            Attribute::Smoking => "Smoking",
            Attribute::Drinking => "Drinking",
            Attribute::Pets => "Pet Preference",
        }
    }

    /// Weight in basis points; all eight sum to 10_000
    pub(crate) fn weight_bp(self) -> u32 {
        match self {
            Attribute::FoodType => 1500,
            Attribute::SleepSchedule => 1500,
            Attribute::StudyHabits => 1500,
            Attribute::Cleanliness => 2000,
            Attribute::SocialLevel => 1000,
            Attribute::Smoking => 1000,
            Attribute::Drinking => 1000,
            Attribute::Pets => 500,
        }
    }

    /// Fixed scoring weight in [0, 1]
    pub fn weight(self) -> f64 {
        self.weight_bp() as f64 / 10_000.0
    }

    /// Values that earn half credit against each other
    pub fn partial_group(self) -> Option<&'static [&'static str]> {
        match self {
            Attribute::FoodType => Some(FOOD_PARTIAL),
            Attribute::SocialLevel => Some(SOCIAL_PARTIAL),
            Attribute::Smoking => Some(SMOKING_PARTIAL),
            Attribute::Drinking => Some(DRINKING_PARTIAL),
            _ => None,
        }
    }

    /// Answers the quiz offers for this attribute
    pub fn legal_values(self) -> &'static [&'static str] {
        match self {
            Attribute::FoodType => &["vegetarian", "non-vegetarian", "vegan", "any"],
            Attribute::SleepSchedule => &["early-bird", "night-owl", "flexible"],
            Attribute::StudyHabits => &["quiet", "music", "collaborative", "flexible"],
            Attribute::Cleanliness => &["high", "medium", "low"],
            Attribute::SocialLevel => &["very-social", "moderate", "private"],
            Attribute::Smoking => &["yes", "no", "occasional"],
            Attribute::Drinking => &["yes", "no", "social"],
            Attribute::Pets => &["love", "neutral", "allergic"],
        }
    }

    pub fn is_legal(self, value: &str) -> bool {
        self.legal_values().iter().any(|v| *v == value)
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// One person's (possibly incomplete) compatibility quiz answers
///
/// Values are kept as raw strings: answers outside an attribute's legal
/// domain are tolerated and simply never match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_schedule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub study_habits: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleanliness: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smoking: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drinking: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pets: Option<String>,
}

impl PreferenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, attr: Attribute) -> &Option<String> {
        match attr {
            Attribute::FoodType => &self.food_type,
            Attribute::SleepSchedule => &self.sleep_schedule,
            Attribute::StudyHabits => &self.study_habits,
            Attribute::Cleanliness => &self.cleanliness,
            Attribute::SocialLevel => &self.social_level,
            Attribute::Smoking => &self.smoking,
            Attribute::Drinking => &self.drinking,
            Attribute::Pets => &self.pets,
        }
    }

    fn slot_mut(&mut self, attr: Attribute) -> &mut Option<String> {
        match attr {
            Attribute::FoodType => &mut self.food_type,
            Attribute::SleepSchedule => &mut self.sleep_schedule,
            Attribute::StudyHabits => &mut self.study_habits,
            Attribute::Cleanliness => &mut self.cleanliness,
            Attribute::SocialLevel => &mut self.social_level,
            Attribute::Smoking => &mut self.smoking,
            Attribute::Drinking => &mut self.drinking,
            Attribute::Pets => &mut self.pets,
        }
    }

    /// Answer for `attr`, with blank strings treated as unanswered
    pub fn get(&self, attr: Attribute) -> Option<&str> {
        self.slot(attr).as_deref().filter(|v| !v.is_empty())
    }

    /// Builder-style setter
    pub fn with(mut self, attr: Attribute, value: impl Into<String>) -> Self {
        self.set(attr, value);
        self
    }

    pub fn set(&mut self, attr: Attribute, value: impl Into<String>) {
        *self.slot_mut(attr) = Some(value.into());
    }

    /// Number of attributes with an answer
    pub fn answered_count(&self) -> usize {
        Attribute::ALL.iter().filter(|a| self.get(**a).is_some()).count()
    }

    /// Answers that fall outside their attribute's legal domain
    pub fn unrecognized(&self) -> Vec<(Attribute, &str)> {
        Attribute::ALL
            .iter()
            .filter_map(|&attr| {
                self.get(attr)
                    .filter(|v| !attr.is_legal(v))
                    .map(|v| (attr, v))
            })
            .collect()
    }
}

/// Per-attribute explanation row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityDetail {
    pub category: String,
    #[serde(rename = "match")]
    pub is_match: bool,
    #[serde(rename = "userPref")]
    pub user_pref: String,
    #[serde(rename = "roommatePref")]
    pub roommate_pref: String,
}

/// Coarse band a score falls into, used for badges and summary text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityTier {
    Great,
    Good,
    Low,
}

impl CompatibilityTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => CompatibilityTier::Great,
            60..=79 => CompatibilityTier::Good,
            _ => CompatibilityTier::Low,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            CompatibilityTier::Great => "Great match! You share similar lifestyle preferences.",
            CompatibilityTier::Good => "Good compatibility with some differences.",
            CompatibilityTier::Low => "Consider discussing lifestyle preferences before moving in.",
        }
    }
}

/// Credit an attribute earns under the matching policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchCredit {
    Exact,
    Flexible,
    Partial,
    None,
}

impl MatchCredit {
    /// Share of the attribute weight awarded, in percent
    pub fn percent(self) -> u32 {
        match self {
            MatchCredit::Exact => 100,
            MatchCredit::Flexible => 70,
            MatchCredit::Partial => 50,
            MatchCredit::None => 0,
        }
    }
}

/// A prospective roommate to rank against the current user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    #[serde(default)]
    pub preferences: PreferenceSet,
}

/// Ranked candidate with its explanation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub id: String,
    pub score: u8,
    pub tier: CompatibilityTier,
    pub details: Vec<CompatibilityDetail>,
}
