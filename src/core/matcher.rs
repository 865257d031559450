use crate::core::{filters::is_eligible, scoring::compatibility_score};
use crate::models::{CandidateFilter, ScoredRoommate, ScoringPoints, StudentProfile};

/// Result of the ranking process
#[derive(Debug)]
pub struct RankOutcome {
    pub matches: Vec<ScoredRoommate>,
    pub total_candidates: usize,
}

/// Roommate ranking orchestrator
///
/// # Pipeline stages
/// 1. Eligibility filtering (self, exclusions, pool policy)
/// 2. Pairwise compatibility scoring; pairs with no comparable
///    dimension are dropped, never shown as 0%
/// 3. Deterministic ordering and truncation
///
/// Stateless apart from the configured point values; callers construct the
/// instance they need and pass it around explicitly.
#[derive(Debug, Clone)]
pub struct RoommateMatcher {
    points: ScoringPoints,
}

impl RoommateMatcher {
    pub fn new(points: ScoringPoints) -> Self {
        Self { points }
    }

    pub fn with_default_points() -> Self {
        Self {
            points: ScoringPoints::default(),
        }
    }

    /// Rank a candidate pool against a query profile.
    ///
    /// # Arguments
    /// * `query` - the querying student's profile (may be partial)
    /// * `candidates` - candidate pool supplied by the caller
    /// * `filter` - eligibility constraints (exclusions, pool policy)
    /// * `limit` - maximum number of matches to return
    ///
    /// Returns the highest-scoring candidates, descending by score with
    /// ties broken ascending by student id so identical inputs always
    /// produce identical output. An empty pool or an all-unknown query
    /// yields an empty result, not an error.
    pub fn rank(
        &self,
        query: &StudentProfile,
        candidates: Vec<StudentProfile>,
        filter: &CandidateFilter,
        limit: usize,
    ) -> RankOutcome {
        let total_candidates = candidates.len();

        let mut matches: Vec<ScoredRoommate> = candidates
            .into_iter()
            .filter(|profile| is_eligible(profile, &query.student_id, filter))
            .filter_map(|profile| {
                let (compatibility, matched_dimensions) =
                    compatibility_score(query, &profile, &self.points)?;

                Some(ScoredRoommate {
                    student_id: profile.student_id,
                    name: profile.name,
                    college: profile.college,
                    verified: profile.verified,
                    compatibility,
                    matched_dimensions,
                })
            })
            .collect();

        matches.sort_by(|a, b| {
            b.compatibility
                .cmp(&a.compatibility)
                .then_with(|| a.student_id.cmp(&b.student_id))
        });

        matches.truncate(limit);

        RankOutcome {
            matches,
            total_candidates,
        }
    }
}

impl Default for RoommateMatcher {
    fn default() -> Self {
        Self::with_default_points()
    }
}
