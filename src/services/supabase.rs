use crate::models::StudentProfile;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to Supabase
#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Supabase PostgREST client for the students table
///
/// The matching service reads profiles only; profile writes happen through
/// the main Roomies backend.
pub struct SupabaseClient {
    base_url: String,
    api_key: String,
    students_table: String,
    client: Client,
}

impl SupabaseClient {
    pub fn new(base_url: String, api_key: String, students_table: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            students_table,
            client,
        }
    }

    fn table_url(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.base_url.trim_end_matches('/'),
            self.students_table
        )
    }

    async fn get_rows(&self, url: &str) -> Result<Vec<Value>, SupabaseError> {
        let response = self
            .client
            .get(url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SupabaseError::ApiError(format!(
                "Supabase request failed: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        json.as_array()
            .cloned()
            .ok_or_else(|| SupabaseError::InvalidResponse("Expected a JSON array".into()))
    }

    /// Fetch a single student profile by its stable identifier
    pub async fn get_profile(&self, student_id: &str) -> Result<StudentProfile, SupabaseError> {
        let url = format!(
            "{}?student_id=eq.{}&limit=1",
            self.table_url(),
            urlencoding::encode(student_id)
        );

        tracing::debug!("Fetching profile for student: {}", student_id);

        let rows = self.get_rows(&url).await?;

        let row = rows
            .into_iter()
            .next()
            .ok_or_else(|| SupabaseError::NotFound(format!("Student {} not found", student_id)))?;

        serde_json::from_value(row)
            .map_err(|e| SupabaseError::InvalidResponse(format!("Failed to parse profile: {}", e)))
    }

    /// Query the candidate pool.
    ///
    /// Pool policy (verified-only, same-college) is the caller's decision;
    /// this method only translates it into PostgREST filters. Rows that fail
    /// to parse are skipped rather than failing the whole pool.
    pub async fn list_candidates(
        &self,
        college: Option<&str>,
        verified_only: bool,
    ) -> Result<Vec<StudentProfile>, SupabaseError> {
        let mut url = format!("{}?select=*", self.table_url());

        if verified_only {
            url.push_str("&verified=eq.true");
        }
        if let Some(college) = college {
            url.push_str(&format!("&college=eq.{}", urlencoding::encode(college)));
        }

        let rows = self.get_rows(&url).await?;
        let total = rows.len();

        let profiles: Vec<StudentProfile> = rows
            .into_iter()
            .filter_map(|row| match serde_json::from_value(row) {
                Ok(profile) => Some(profile),
                Err(e) => {
                    tracing::warn!("Skipping malformed student row: {}", e);
                    None
                }
            })
            .collect();

        tracing::debug!("Fetched {} candidates (of {} rows)", profiles.len(), total);

        Ok(profiles)
    }
}
