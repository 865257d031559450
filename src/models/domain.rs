use serde::{Deserialize, Serialize};

/// Sleep schedule preference. `Flexible` is compatible with any value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepSchedule {
    EarlyBird,
    NightOwl,
    Flexible,
}

/// Social energy preference. `Ambivert` partially matches any value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialLevel {
    Extrovert,
    Ambivert,
    Introvert,
}

/// Cleanliness preference. `ModerateClean` partially matches any value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleanlinessPref {
    NeatFreak,
    ModerateClean,
    Messy,
}

/// Monthly rent budget, as ordered bands (INR). Band labels match the
/// platform's signup form values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BudgetRange {
    #[serde(rename = "5k-8k")]
    From5kTo8k,
    #[serde(rename = "8k-12k")]
    From8kTo12k,
    #[serde(rename = "12k-18k")]
    From12kTo18k,
    #[serde(rename = "18k+")]
    Above18k,
}

impl BudgetRange {
    /// Position of this band on the ordered scale (0..=3).
    #[inline]
    pub fn band_index(self) -> u8 {
        match self {
            BudgetRange::From5kTo8k => 0,
            BudgetRange::From8kTo12k => 1,
            BudgetRange::From12kTo18k => 2,
            BudgetRange::Above18k => 3,
        }
    }

    /// Map a monthly rupee amount onto its band. Bands are lower-inclusive
    /// (8000 falls in 8k-12k); amounts below 5000 clamp to the lowest band.
    pub fn from_monthly_amount(rupees: u32) -> Self {
        match rupees {
            0..=7_999 => BudgetRange::From5kTo8k,
            8_000..=11_999 => BudgetRange::From8kTo12k,
            12_000..=17_999 => BudgetRange::From12kTo18k,
            _ => BudgetRange::Above18k,
        }
    }

    /// How many bands apart two budgets are.
    #[inline]
    pub fn band_distance(self, other: Self) -> u8 {
        self.band_index().abs_diff(other.band_index())
    }
}

/// Compatibility dimensions used by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    SleepSchedule,
    SocialLevel,
    Cleanliness,
    Budget,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::SleepSchedule,
        Dimension::SocialLevel,
        Dimension::Cleanliness,
        Dimension::Budget,
    ];
}

/// A student's matching profile: stable identity, display fields, and the
/// lifestyle attributes used for compatibility scoring.
///
/// Lifestyle attributes are optional; an absent attribute means "unknown"
/// and is excluded from scoring rather than counted as a mismatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    #[serde(rename = "studentId", alias = "student_id")]
    pub student_id: String,
    pub name: String,
    #[serde(default)]
    pub college: Option<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(rename = "sleepSchedule", alias = "sleep_schedule", default)]
    pub sleep_schedule: Option<SleepSchedule>,
    #[serde(rename = "socialLevel", alias = "social_level", default)]
    pub social_level: Option<SocialLevel>,
    #[serde(rename = "cleanlinessPref", alias = "cleanliness_pref", default)]
    pub cleanliness_pref: Option<CleanlinessPref>,
    #[serde(rename = "budgetRange", alias = "budget_range", default)]
    pub budget_range: Option<BudgetRange>,
}

impl StudentProfile {
    /// Number of lifestyle attributes the student has filled in.
    pub fn known_attribute_count(&self) -> usize {
        self.sleep_schedule.is_some() as usize
            + self.social_level.is_some() as usize
            + self.cleanliness_pref.is_some() as usize
            + self.budget_range.is_some() as usize
    }

    /// True when at least one lifestyle attribute is known.
    pub fn has_preferences(&self) -> bool {
        self.known_attribute_count() > 0
    }
}

/// Partial preference set produced by free-text extraction. Only the
/// dimensions that were confidently detected are populated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialPreferences {
    #[serde(rename = "sleepSchedule", skip_serializing_if = "Option::is_none", default)]
    pub sleep_schedule: Option<SleepSchedule>,
    #[serde(rename = "socialLevel", skip_serializing_if = "Option::is_none", default)]
    pub social_level: Option<SocialLevel>,
    #[serde(rename = "cleanlinessPref", skip_serializing_if = "Option::is_none", default)]
    pub cleanliness_pref: Option<CleanlinessPref>,
    #[serde(rename = "budgetRange", skip_serializing_if = "Option::is_none", default)]
    pub budget_range: Option<BudgetRange>,
}

impl PartialPreferences {
    pub fn is_empty(&self) -> bool {
        self.detected_count() == 0
    }

    pub fn detected_count(&self) -> usize {
        self.sleep_schedule.is_some() as usize
            + self.social_level.is_some() as usize
            + self.cleanliness_pref.is_some() as usize
            + self.budget_range.is_some() as usize
    }

    /// Build an anonymous query profile from the detected preferences,
    /// e.g. for chatbot sessions that have no stored profile.
    pub fn into_query_profile(self, student_id: &str) -> StudentProfile {
        StudentProfile {
            student_id: student_id.to_string(),
            name: String::new(),
            college: None,
            verified: false,
            sleep_schedule: self.sleep_schedule,
            social_level: self.social_level,
            cleanliness_pref: self.cleanliness_pref,
            budget_range: self.budget_range,
        }
    }
}

/// Roommate interaction kinds tracked by the event store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoommateEventType {
    Viewed,
    Contacted,
    Matched,
    Blocked,
}

/// Scored match result: candidate display fields plus the compatibility
/// percentage. Ephemeral, computed per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredRoommate {
    #[serde(rename = "studentId")]
    pub student_id: String,
    pub name: String,
    pub college: Option<String>,
    pub verified: bool,
    /// Compatibility percentage in 0..=100.
    pub compatibility: u8,
    /// Dimensions on which both profiles aligned (exact or partial).
    #[serde(rename = "matchedDimensions")]
    pub matched_dimensions: Vec<Dimension>,
}

/// Eligibility constraints applied before scoring
#[derive(Debug, Clone)]
pub struct CandidateFilter {
    pub exclude_student_ids: Vec<String>,
    pub require_verified: bool,
    pub college: Option<String>,
}

/// Points awarded per dimension outcome. Exact point values are tunable
/// via configuration; the defaults are the platform's production values.
#[derive(Debug, Clone, Copy)]
pub struct ScoringPoints {
    /// Exact match on any dimension, and the per-dimension maximum.
    pub exact: u32,
    /// Partial match (ambivert / moderate_clean on either side).
    pub partial: u32,
    /// Adjacent budget bands.
    pub budget_adjacent: u32,
}

impl Default for ScoringPoints {
    fn default() -> Self {
        Self {
            exact: 25,
            partial: 15,
            budget_adjacent: 10,
        }
    }
}
