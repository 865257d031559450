use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to find compatible roommates
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindRoommatesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "student_id", rename = "studentId")]
    pub student_id: String,
    #[validate(range(min = 1, max = 50))]
    #[serde(default = "default_limit")]
    pub limit: u16,
    #[serde(default)]
    #[serde(alias = "exclude_student_ids", rename = "excludeStudentIds")]
    pub exclude_student_ids: Vec<String>,
}

fn default_limit() -> u16 {
    5
}

/// Request to extract roommate preferences from a chat message
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExtractPreferencesRequest {
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
}

/// Request to record a roommate interaction event
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecordEventRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "student_id", rename = "studentId")]
    pub student_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "target_student_id", rename = "targetStudentId")]
    pub target_student_id: String,
    #[serde(alias = "event_type", rename = "eventType")]
    pub event_type: String,
}
