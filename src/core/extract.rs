use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{
    BudgetRange, CleanlinessPref, PartialPreferences, SleepSchedule, SocialLevel,
};

/// A keyword-set -> attribute value rule. Rules within one dimension are
/// designed to be mutually exclusive by keyword, so table order does not
/// affect the output for well-formed input.
struct KeywordRule<T: Copy> {
    value: T,
    keywords: &'static [&'static str],
}

const SLEEP_RULES: &[KeywordRule<SleepSchedule>] = &[
    KeywordRule {
        value: SleepSchedule::EarlyBird,
        keywords: &["early bird", "morning person", "wake up early", "early riser"],
    },
    KeywordRule {
        value: SleepSchedule::NightOwl,
        keywords: &["night owl", "stay up late", "up all night", "nocturnal"],
    },
    KeywordRule {
        value: SleepSchedule::Flexible,
        keywords: &["flexible sleep", "any sleep schedule", "sleep whenever"],
    },
];

const SOCIAL_RULES: &[KeywordRule<SocialLevel>] = &[
    KeywordRule {
        value: SocialLevel::Extrovert,
        keywords: &["extrovert", "very social", "outgoing", "love parties", "party person"],
    },
    KeywordRule {
        value: SocialLevel::Ambivert,
        keywords: &["ambivert", "moderately social", "sometimes social"],
    },
    KeywordRule {
        value: SocialLevel::Introvert,
        keywords: &["introvert", "keep to myself", "quiet person", "prefer staying in"],
    },
];

const CLEANLINESS_RULES: &[KeywordRule<CleanlinessPref>] = &[
    KeywordRule {
        value: CleanlinessPref::NeatFreak,
        keywords: &["neat freak", "very clean", "very organized", "spotless", "super tidy"],
    },
    KeywordRule {
        value: CleanlinessPref::ModerateClean,
        keywords: &["moderately clean", "fairly tidy", "reasonably clean", "clean enough"],
    },
    KeywordRule {
        value: CleanlinessPref::Messy,
        keywords: &["messy", "untidy", "bit of a slob"],
    },
];

/// Monetary amount, optionally ₹-prefixed, comma-grouped, or k-suffixed
/// ("8000", "8,000", "8k", "₹ 8000").
static BUDGET_AMOUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:₹\s*)?(\d{1,3}(?:,\d{3})+|\d+(?:\.\d+)?)\s*(k\b)?")
        .expect("budget amount pattern is valid")
});

fn detect<T: Copy>(text: &str, rules: &[KeywordRule<T>]) -> Option<T> {
    rules
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|rule| rule.value)
}

/// Infer a budget band from the first plausible monthly amount in the text.
/// Bare numbers under 1000 are ignored (ages, counts, times) unless they
/// carry a `k` suffix.
fn detect_budget(text: &str) -> Option<BudgetRange> {
    for caps in BUDGET_AMOUNT.captures_iter(text) {
        let raw = caps.get(1)?.as_str().replace(',', "");
        let Ok(mut amount) = raw.parse::<f64>() else {
            continue;
        };
        if caps.get(2).is_some() {
            amount *= 1000.0;
        }
        if amount >= 1000.0 {
            return Some(BudgetRange::from_monthly_amount(amount as u32));
        }
    }
    None
}

/// Extract partial roommate preferences from a free-text chat message.
///
/// Each dimension is evaluated independently against its own rule table;
/// a message may yield anywhere from zero to four attributes. Detection is
/// binary: ambiguous text yields nothing for that dimension rather than a
/// guessed default. Callers needing higher precision should route users to
/// the structured preference form.
pub fn extract_preferences(message: &str) -> PartialPreferences {
    let text = message.to_lowercase();

    PartialPreferences {
        sleep_schedule: detect(&text, SLEEP_RULES),
        social_level: detect(&text, SOCIAL_RULES),
        cleanliness_pref: detect(&text, CLEANLINESS_RULES),
        budget_range: detect_budget(&text),
    }
}
