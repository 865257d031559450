use crate::models::{
    BudgetRange, CleanlinessPref, Dimension, ScoringPoints, SleepSchedule, SocialLevel,
    StudentProfile,
};

/// Outcome of comparing one dimension across two profiles.
///
/// Each dimension has its own compatibility table (below); adding a
/// dimension means adding a table entry, not touching the ranking code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionOutcome {
    /// Both values known and fully compatible.
    Exact,
    /// Both values known and partially compatible.
    Partial,
    /// Budget bands one step apart.
    Adjacent,
    /// Both values known and incompatible.
    Mismatch,
    /// Value missing on at least one side; excluded from scoring.
    Unknown,
}

impl DimensionOutcome {
    #[inline]
    fn points(self, points: &ScoringPoints) -> u32 {
        match self {
            DimensionOutcome::Exact => points.exact,
            DimensionOutcome::Partial => points.partial,
            DimensionOutcome::Adjacent => points.budget_adjacent,
            DimensionOutcome::Mismatch => 0,
            DimensionOutcome::Unknown => 0,
        }
    }

    #[inline]
    fn is_comparable(self) -> bool {
        !matches!(self, DimensionOutcome::Unknown)
    }

    #[inline]
    fn is_match(self) -> bool {
        matches!(
            self,
            DimensionOutcome::Exact | DimensionOutcome::Partial | DimensionOutcome::Adjacent
        )
    }
}

/// Compare a single dimension of two profiles.
pub fn compare_dimension(
    dimension: Dimension,
    a: &StudentProfile,
    b: &StudentProfile,
) -> DimensionOutcome {
    match dimension {
        Dimension::SleepSchedule => compare(a.sleep_schedule, b.sleep_schedule, sleep_outcome),
        Dimension::SocialLevel => compare(a.social_level, b.social_level, social_outcome),
        Dimension::Cleanliness => {
            compare(a.cleanliness_pref, b.cleanliness_pref, cleanliness_outcome)
        }
        Dimension::Budget => compare(a.budget_range, b.budget_range, budget_outcome),
    }
}

#[inline]
fn compare<T: Copy>(
    a: Option<T>,
    b: Option<T>,
    rule: fn(T, T) -> DimensionOutcome,
) -> DimensionOutcome {
    match (a, b) {
        (Some(a), Some(b)) => rule(a, b),
        _ => DimensionOutcome::Unknown,
    }
}

/// Flexible sleepers are compatible with any schedule.
fn sleep_outcome(a: SleepSchedule, b: SleepSchedule) -> DimensionOutcome {
    if a == b || a == SleepSchedule::Flexible || b == SleepSchedule::Flexible {
        DimensionOutcome::Exact
    } else {
        DimensionOutcome::Mismatch
    }
}

/// Ambiverts partially match any social level.
fn social_outcome(a: SocialLevel, b: SocialLevel) -> DimensionOutcome {
    if a == b {
        DimensionOutcome::Exact
    } else if a == SocialLevel::Ambivert || b == SocialLevel::Ambivert {
        DimensionOutcome::Partial
    } else {
        DimensionOutcome::Mismatch
    }
}

/// Moderately clean students partially match any cleanliness preference.
fn cleanliness_outcome(a: CleanlinessPref, b: CleanlinessPref) -> DimensionOutcome {
    if a == b {
        DimensionOutcome::Exact
    } else if a == CleanlinessPref::ModerateClean || b == CleanlinessPref::ModerateClean {
        DimensionOutcome::Partial
    } else {
        DimensionOutcome::Mismatch
    }
}

/// Budget compatibility is distance-based on the ordered band index.
fn budget_outcome(a: BudgetRange, b: BudgetRange) -> DimensionOutcome {
    match a.band_distance(b) {
        0 => DimensionOutcome::Exact,
        1 => DimensionOutcome::Adjacent,
        _ => DimensionOutcome::Mismatch,
    }
}

/// Calculate the pairwise compatibility score (0-100) between two profiles.
///
/// Only dimensions known on both sides contribute; the score is normalized
/// over the maximum points of those dimensions, so missing data reduces the
/// denominator instead of counting as a mismatch.
///
/// Returns `None` when no dimension is comparable: such a pair carries no
/// signal and must be excluded from ranking rather than shown as 0%.
///
/// The per-dimension tables are all symmetric, so
/// `compatibility_score(a, b, p) == compatibility_score(b, a, p)`.
pub fn compatibility_score(
    a: &StudentProfile,
    b: &StudentProfile,
    points: &ScoringPoints,
) -> Option<(u8, Vec<Dimension>)> {
    let mut awarded: u32 = 0;
    let mut max_points: u32 = 0;
    let mut matched = Vec::new();

    for dimension in Dimension::ALL {
        let outcome = compare_dimension(dimension, a, b);
        if !outcome.is_comparable() {
            continue;
        }

        max_points += points.exact;
        awarded += outcome.points(points);

        if outcome.is_match() {
            matched.push(dimension);
        }
    }

    if max_points == 0 {
        return None;
    }

    let score = ((awarded as f64 / max_points as f64) * 100.0).round() as u8;
    Some((score, matched))
}
