// Unit tests for roomies-match

use roomies_match::core::{extract_preferences, scoring::compatibility_score};
use roomies_match::models::{
    BudgetRange, CleanlinessPref, ScoringPoints, SleepSchedule, SocialLevel, StudentProfile,
};

fn profile(
    id: &str,
    sleep: Option<SleepSchedule>,
    social: Option<SocialLevel>,
    clean: Option<CleanlinessPref>,
    budget: Option<BudgetRange>,
) -> StudentProfile {
    StudentProfile {
        student_id: id.to_string(),
        name: format!("Student {}", id),
        college: Some("DJSCE".to_string()),
        verified: true,
        sleep_schedule: sleep,
        social_level: social,
        cleanliness_pref: clean,
        budget_range: budget,
    }
}

fn all_variants() -> Vec<StudentProfile> {
    let sleeps = [None, Some(SleepSchedule::EarlyBird), Some(SleepSchedule::NightOwl), Some(SleepSchedule::Flexible)];
    let socials = [None, Some(SocialLevel::Extrovert), Some(SocialLevel::Ambivert), Some(SocialLevel::Introvert)];
    let budgets = [None, Some(BudgetRange::From5kTo8k), Some(BudgetRange::Above18k)];

    let mut profiles = Vec::new();
    let mut n = 0;
    for sleep in sleeps {
        for social in socials {
            for budget in budgets {
                profiles.push(profile(&format!("s{}", n), sleep, social, None, budget));
                n += 1;
            }
        }
    }
    profiles
}

#[test]
fn test_score_symmetry_over_variant_grid() {
    let points = ScoringPoints::default();
    let profiles = all_variants();

    for a in &profiles {
        for b in &profiles {
            assert_eq!(
                compatibility_score(a, b, &points),
                compatibility_score(b, a, &points),
                "score must be symmetric for {} / {}",
                a.student_id,
                b.student_id
            );
        }
    }
}

#[test]
fn test_self_score_is_100_when_any_attribute_known() {
    let points = ScoringPoints::default();

    for p in all_variants() {
        match compatibility_score(&p, &p, &points) {
            Some((score, _)) => {
                assert!(p.has_preferences());
                assert_eq!(score, 100, "self-score must be 100 for {}", p.student_id);
            }
            None => assert!(!p.has_preferences()),
        }
    }
}

#[test]
fn test_scores_stay_in_percentage_range() {
    let points = ScoringPoints::default();
    let profiles = all_variants();

    for a in &profiles {
        for b in &profiles {
            if let Some((score, matched)) = compatibility_score(a, b, &points) {
                assert!(score <= 100);
                assert!(matched.len() <= 4);
            }
        }
    }
}

#[test]
fn test_spec_extraction_example() {
    let prefs = extract_preferences("I'm a night owl, pretty messy, budget around 8000");

    assert_eq!(prefs.sleep_schedule, Some(SleepSchedule::NightOwl));
    assert_eq!(prefs.cleanliness_pref, Some(CleanlinessPref::Messy));
    assert_eq!(prefs.budget_range, Some(BudgetRange::From8kTo12k));
    assert!(prefs.social_level.is_none());
}

#[test]
fn test_extraction_of_plain_text_is_empty() {
    assert!(extract_preferences("hello").is_empty());
    assert!(extract_preferences("what documents do I need to verify?").is_empty());
}

#[test]
fn test_extracted_preferences_round_trip_as_query() {
    let prefs = extract_preferences("early bird and an introvert, budget 10k");
    let query = prefs.into_query_profile("chat-session");

    assert_eq!(query.sleep_schedule, Some(SleepSchedule::EarlyBird));
    assert_eq!(query.social_level, Some(SocialLevel::Introvert));
    assert_eq!(query.budget_range, Some(BudgetRange::From8kTo12k));

    // The derived query profile scores against real profiles
    let candidate = profile(
        "c1",
        Some(SleepSchedule::EarlyBird),
        Some(SocialLevel::Introvert),
        None,
        Some(BudgetRange::From8kTo12k),
    );

    let (score, _) =
        compatibility_score(&query, &candidate, &ScoringPoints::default()).unwrap();
    assert_eq!(score, 100);
}

#[test]
fn test_mismatched_profiles_score_low_but_defined() {
    let a = profile(
        "a",
        Some(SleepSchedule::EarlyBird),
        Some(SocialLevel::Extrovert),
        Some(CleanlinessPref::NeatFreak),
        Some(BudgetRange::From5kTo8k),
    );
    let b = profile(
        "b",
        Some(SleepSchedule::NightOwl),
        Some(SocialLevel::Introvert),
        Some(CleanlinessPref::Messy),
        Some(BudgetRange::Above18k),
    );

    let (score, matched) = compatibility_score(&a, &b, &ScoringPoints::default()).unwrap();
    assert_eq!(score, 0);
    assert!(matched.is_empty());
}
