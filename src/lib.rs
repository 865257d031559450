//! Roomies Match - roommate compatibility matching service
//!
//! This library provides the compatibility core used by the Roomies
//! student-housing platform: pairwise lifestyle scoring, candidate ranking,
//! and free-text preference extraction for the chatbot.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{extract_preferences, RoommateMatcher};
pub use crate::models::{
    CandidateFilter, FindRoommatesRequest, FindRoommatesResponse, PartialPreferences,
    ScoredRoommate, ScoringPoints, StudentProfile,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let prefs = extract_preferences("early bird, very clean");
        assert_eq!(prefs.detected_count(), 2);
    }
}
