use serde::{Deserialize, Serialize};

use crate::models::domain::{PartialPreferences, ScoredRoommate};

/// Response for the find roommates endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindRoommatesResponse {
    pub matches: Vec<ScoredRoommate>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the preference extraction endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractPreferencesResponse {
    pub preferences: PartialPreferences,
    #[serde(rename = "detectedCount")]
    pub detected_count: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Record event response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordEventResponse {
    pub success: bool,
    pub event_id: String,
}
