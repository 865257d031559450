// Core algorithm exports
pub mod extract;
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use extract::extract_preferences;
pub use filters::is_eligible;
pub use matcher::{RankOutcome, RoommateMatcher};
pub use scoring::{compatibility_score, compare_dimension, DimensionOutcome};
