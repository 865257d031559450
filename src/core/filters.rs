use crate::models::{CandidateFilter, StudentProfile};

/// Check whether a candidate may be ranked against the querying student.
///
/// Pool policy (verified-only, same-college) is decided by the caller and
/// carried in the filter; the scorer never sees ineligible candidates.
#[inline]
pub fn is_eligible(profile: &StudentProfile, query_id: &str, filter: &CandidateFilter) -> bool {
    // Never match a student with themselves
    if profile.student_id == query_id {
        return false;
    }

    // Already matched, blocked, or explicitly excluded by the client
    if filter
        .exclude_student_ids
        .iter()
        .any(|id| id == &profile.student_id)
    {
        return false;
    }

    if filter.require_verified && !profile.verified {
        return false;
    }

    if let Some(college) = &filter.college {
        if profile.college.as_deref() != Some(college.as_str()) {
            return false;
        }
    }

    true
}
