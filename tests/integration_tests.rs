// Integration tests for roomies-match

use roomies_match::core::RoommateMatcher;
use roomies_match::models::{
    BudgetRange, CandidateFilter, CleanlinessPref, ScoringPoints, SleepSchedule, SocialLevel,
    StudentProfile,
};

fn student(
    id: &str,
    college: &str,
    verified: bool,
    sleep: SleepSchedule,
    social: SocialLevel,
    clean: CleanlinessPref,
    budget: BudgetRange,
) -> StudentProfile {
    StudentProfile {
        student_id: id.to_string(),
        name: format!("Student {}", id),
        college: Some(college.to_string()),
        verified,
        sleep_schedule: Some(sleep),
        social_level: Some(social),
        cleanliness_pref: Some(clean),
        budget_range: Some(budget),
    }
}

fn query_student() -> StudentProfile {
    student(
        "query",
        "DJSCE",
        true,
        SleepSchedule::NightOwl,
        SocialLevel::Introvert,
        CleanlinessPref::ModerateClean,
        BudgetRange::From8kTo12k,
    )
}

fn campus_filter(exclude: Vec<String>) -> CandidateFilter {
    CandidateFilter {
        exclude_student_ids: exclude,
        require_verified: true,
        college: Some("DJSCE".to_string()),
    }
}

#[test]
fn test_end_to_end_ranking() {
    let matcher = RoommateMatcher::with_default_points();
    let query = query_student();

    let candidates = vec![
        // Identical lifestyle: top match
        student("twin", "DJSCE", true, SleepSchedule::NightOwl, SocialLevel::Introvert, CleanlinessPref::ModerateClean, BudgetRange::From8kTo12k),
        // Flexible sleeper, adjacent budget: good match
        student("close", "DJSCE", true, SleepSchedule::Flexible, SocialLevel::Introvert, CleanlinessPref::ModerateClean, BudgetRange::From12kTo18k),
        // Opposite lifestyle: low score but still listed
        student("opposite", "DJSCE", true, SleepSchedule::EarlyBird, SocialLevel::Extrovert, CleanlinessPref::ModerateClean, BudgetRange::Above18k),
        // Wrong college: filtered before scoring
        student("elsewhere", "VJTI", true, SleepSchedule::NightOwl, SocialLevel::Introvert, CleanlinessPref::ModerateClean, BudgetRange::From8kTo12k),
        // Unverified: filtered by pool policy
        student("unverified", "DJSCE", false, SleepSchedule::NightOwl, SocialLevel::Introvert, CleanlinessPref::ModerateClean, BudgetRange::From8kTo12k),
    ];

    let outcome = matcher.rank(&query, candidates, &campus_filter(vec![]), 5);

    let ids: Vec<&str> = outcome.matches.iter().map(|m| m.student_id.as_str()).collect();
    assert_eq!(ids, vec!["twin", "close", "opposite"]);
    assert_eq!(outcome.matches[0].compatibility, 100);
    assert!(outcome.matches[1].compatibility < 100);
    assert!(outcome.matches[2].compatibility < outcome.matches[1].compatibility);
    assert_eq!(outcome.total_candidates, 5);
}

#[test]
fn test_exclusions_remove_matched_and_blocked_pairs() {
    let matcher = RoommateMatcher::with_default_points();
    let query = query_student();

    let candidates = vec![
        student("kept", "DJSCE", true, SleepSchedule::NightOwl, SocialLevel::Introvert, CleanlinessPref::ModerateClean, BudgetRange::From8kTo12k),
        student("already-matched", "DJSCE", true, SleepSchedule::NightOwl, SocialLevel::Introvert, CleanlinessPref::ModerateClean, BudgetRange::From8kTo12k),
        student("blocked", "DJSCE", true, SleepSchedule::NightOwl, SocialLevel::Introvert, CleanlinessPref::ModerateClean, BudgetRange::From8kTo12k),
    ];

    let filter = campus_filter(vec!["already-matched".to_string(), "blocked".to_string()]);
    let outcome = matcher.rank(&query, candidates, &filter, 5);

    assert_eq!(outcome.matches.len(), 1);
    assert_eq!(outcome.matches[0].student_id, "kept");
}

#[test]
fn test_ranking_is_deterministic_across_runs() {
    let matcher = RoommateMatcher::with_default_points();
    let query = query_student();

    let make_pool = || -> Vec<StudentProfile> {
        (0..30)
            .map(|i| {
                let sleep = match i % 3 {
                    0 => SleepSchedule::NightOwl,
                    1 => SleepSchedule::EarlyBird,
                    _ => SleepSchedule::Flexible,
                };
                let budget = match i % 4 {
                    0 => BudgetRange::From5kTo8k,
                    1 => BudgetRange::From8kTo12k,
                    2 => BudgetRange::From12kTo18k,
                    _ => BudgetRange::Above18k,
                };
                student(
                    &format!("s{:02}", i),
                    "DJSCE",
                    true,
                    sleep,
                    SocialLevel::Ambivert,
                    CleanlinessPref::ModerateClean,
                    budget,
                )
            })
            .collect()
    };

    let first = matcher.rank(&query, make_pool(), &campus_filter(vec![]), 10);
    let second = matcher.rank(&query, make_pool(), &campus_filter(vec![]), 10);

    let first_ids: Vec<&str> = first.matches.iter().map(|m| m.student_id.as_str()).collect();
    let second_ids: Vec<&str> = second.matches.iter().map(|m| m.student_id.as_str()).collect();
    assert_eq!(first_ids, second_ids);

    // Descending by score, ties ascending by id
    for pair in first.matches.windows(2) {
        assert!(pair[0].compatibility >= pair[1].compatibility);
        if pair[0].compatibility == pair[1].compatibility {
            assert!(pair[0].student_id < pair[1].student_id);
        }
    }
}

#[test]
fn test_partial_profiles_rank_over_known_dimensions_only() {
    let matcher = RoommateMatcher::with_default_points();

    // Query knows only their sleep schedule
    let mut query = query_student();
    query.social_level = None;
    query.cleanliness_pref = None;
    query.budget_range = None;

    let mut sleep_only = student(
        "sleep-only",
        "DJSCE",
        true,
        SleepSchedule::NightOwl,
        SocialLevel::Extrovert,
        CleanlinessPref::Messy,
        BudgetRange::Above18k,
    );
    sleep_only.social_level = None;

    let candidates = vec![
        sleep_only,
        student("full", "DJSCE", true, SleepSchedule::EarlyBird, SocialLevel::Introvert, CleanlinessPref::ModerateClean, BudgetRange::From8kTo12k),
    ];

    let outcome = matcher.rank(&query, candidates, &campus_filter(vec![]), 5);

    // Only the sleep dimension is comparable; agreement wins regardless of
    // the candidate's other attributes
    assert_eq!(outcome.matches[0].student_id, "sleep-only");
    assert_eq!(outcome.matches[0].compatibility, 100);
    assert_eq!(outcome.matches[1].compatibility, 0);
}

#[test]
fn test_custom_scoring_points() {
    // Halving the partial award changes the score accordingly
    let matcher = RoommateMatcher::new(ScoringPoints {
        exact: 25,
        partial: 5,
        budget_adjacent: 10,
    });

    let mut query = query_student();
    query.sleep_schedule = None;
    query.cleanliness_pref = None;
    query.budget_range = None;
    query.social_level = Some(SocialLevel::Ambivert);

    let mut candidate = student(
        "c",
        "DJSCE",
        true,
        SleepSchedule::NightOwl,
        SocialLevel::Extrovert,
        CleanlinessPref::Messy,
        BudgetRange::Above18k,
    );
    candidate.sleep_schedule = None;
    candidate.cleanliness_pref = None;
    candidate.budget_range = None;

    let outcome = matcher.rank(&query, vec![candidate], &campus_filter(vec![]), 5);

    // 5 of 25 points on the single comparable dimension
    assert_eq!(outcome.matches[0].compatibility, 20);
}
