// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BudgetRange, CandidateFilter, CleanlinessPref, Dimension, PartialPreferences,
    RoommateEventType, ScoredRoommate, ScoringPoints, SleepSchedule, SocialLevel, StudentProfile,
};
pub use requests::{ExtractPreferencesRequest, FindRoommatesRequest, RecordEventRequest};
pub use responses::{
    ErrorResponse, ExtractPreferencesResponse, FindRoommatesResponse, HealthResponse,
    RecordEventResponse,
};
