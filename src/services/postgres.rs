use serde::{Deserialize, Serialize};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum PostgresError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Interaction types between two students
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "roommate_event_type", rename_all = "lowercase")]
pub enum EventType {
    Viewed,
    Contacted,
    Matched,
    Blocked,
}

impl EventType {
    /// Matched and blocked pairs are dropped from future candidate pools.
    pub fn excludes_from_matching(&self) -> bool {
        matches!(self, EventType::Matched | EventType::Blocked)
    }
}

impl From<crate::models::RoommateEventType> for EventType {
    fn from(value: crate::models::RoommateEventType) -> Self {
        match value {
            crate::models::RoommateEventType::Viewed => EventType::Viewed,
            crate::models::RoommateEventType::Contacted => EventType::Contacted,
            crate::models::RoommateEventType::Matched => EventType::Matched,
            crate::models::RoommateEventType::Blocked => EventType::Blocked,
        }
    }
}

/// Store for roommate interaction events
///
/// Keeps one row per (student, target) pair so the matcher can exclude
/// students who have already matched with, or blocked, the querying student.
pub struct MatchEventStore {
    pool: PgPool,
}

impl MatchEventStore {
    /// Create a new event store from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, PostgresError> {
        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Record an interaction between two students.
    ///
    /// Uses INSERT ... ON CONFLICT so repeated interactions update the
    /// latest event type and timestamp instead of erroring.
    pub async fn record_event(
        &self,
        student_id: &str,
        target_student_id: &str,
        event_type: EventType,
    ) -> Result<(), PostgresError> {
        let query = r#"
            INSERT INTO roommate_events (student_id, target_student_id, event_type, created_at)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (student_id, target_student_id)
            DO UPDATE SET
                event_type = EXCLUDED.event_type,
                created_at = EXCLUDED.created_at
        "#;

        sqlx::query(query)
            .bind(student_id)
            .bind(target_student_id)
            .bind(&event_type)
            .execute(&self.pool)
            .await?;

        tracing::debug!(
            "Recorded roommate event: {} -> {} ({:?})",
            student_id,
            target_student_id,
            event_type
        );

        Ok(())
    }

    /// Students the given student can no longer be matched with.
    ///
    /// Covers both directions: a block by either side removes the pair.
    pub async fn excluded_ids(&self, student_id: &str) -> Result<Vec<String>, PostgresError> {
        let query = r#"
            SELECT target_student_id AS other_id
            FROM roommate_events
            WHERE student_id = $1 AND event_type IN ('matched', 'blocked')
            UNION
            SELECT student_id AS other_id
            FROM roommate_events
            WHERE target_student_id = $1 AND event_type IN ('matched', 'blocked')
        "#;

        let rows = sqlx::query(query).bind(student_id).fetch_all(&self.pool).await?;

        let ids: Vec<String> = rows.iter().map(|row| row.get("other_id")).collect();

        tracing::debug!("Student {} has {} excluded pairs", student_id, ids.len());

        Ok(ids)
    }

    /// Remove all interaction events for a student (account deletion)
    pub async fn clear_events(&self, student_id: &str) -> Result<u64, PostgresError> {
        let query = r#"
            DELETE FROM roommate_events
            WHERE student_id = $1 OR target_student_id = $1
        "#;

        let result = sqlx::query(query).bind(student_id).execute(&self.pool).await?;

        tracing::info!(
            "Cleared {} roommate events for student {}",
            result.rows_affected(),
            student_id
        );

        Ok(result.rows_affected())
    }

    /// Per-type event counts for a student
    pub async fn event_stats(&self, student_id: &str) -> Result<EventStats, PostgresError> {
        let query = r#"
            SELECT
                COUNT(*) as total,
                COUNT(*) FILTER (WHERE event_type = 'viewed') as viewed,
                COUNT(*) FILTER (WHERE event_type = 'contacted') as contacted,
                COUNT(*) FILTER (WHERE event_type = 'matched') as matched,
                COUNT(*) FILTER (WHERE event_type = 'blocked') as blocked,
                MAX(created_at) as last_event_at
            FROM roommate_events
            WHERE student_id = $1
        "#;

        let row = sqlx::query(query).bind(student_id).fetch_one(&self.pool).await?;

        Ok(EventStats {
            student_id: student_id.to_string(),
            total: row.get("total"),
            viewed: row.get("viewed"),
            contacted: row.get("contacted"),
            matched: row.get("matched"),
            blocked: row.get("blocked"),
            last_event_at: row.get("last_event_at"),
        })
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, PostgresError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

/// Counts of a student's recorded interactions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventStats {
    pub student_id: String,
    pub total: i64,
    pub viewed: i64,
    pub contacted: i64,
    pub matched: i64,
    pub blocked: i64,
    pub last_event_at: Option<chrono::DateTime<chrono::Utc>>,
}
