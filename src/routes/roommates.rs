use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{extract_preferences, RoommateMatcher};
use crate::models::{
    CandidateFilter, ErrorResponse, ExtractPreferencesRequest, ExtractPreferencesResponse,
    FindRoommatesRequest, FindRoommatesResponse, HealthResponse, RecordEventRequest,
    RecordEventResponse, RoommateEventType,
};
use crate::services::{MatchEventStore, ProfileCache, SupabaseClient, SupabaseError};

/// Candidate pool policy, resolved from configuration at startup
#[derive(Debug, Clone)]
pub struct MatchPolicy {
    pub require_verified: bool,
    pub same_college_only: bool,
    pub max_limit: usize,
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub supabase: Arc<SupabaseClient>,
    pub events: Arc<MatchEventStore>,
    pub cache: Arc<ProfileCache>,
    pub matcher: RoommateMatcher,
    pub policy: MatchPolicy,
}

/// Configure all roommate-matching routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/roommates/find", web::post().to(find_roommates))
        .route("/roommates/extract", web::post().to(extract))
        .route("/roommates/event", web::post().to(record_event))
        .route("/roommates/excluded", web::get().to(get_excluded));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let db_healthy = state.events.health_check().await.unwrap_or(false);

    let status = if db_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find compatible roommates
///
/// POST /api/v1/roommates/find
///
/// Request body:
/// ```json
/// {
///   "studentId": "string",
///   "limit": 5,
///   "excludeStudentIds": ["string"]
/// }
/// ```
async fn find_roommates(
    state: web::Data<AppState>,
    req: web::Json<FindRoommatesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_roommates request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let student_id = &req.student_id;
    let limit = (req.limit as usize).min(state.policy.max_limit);

    tracing::info!("Finding roommates for student: {}, limit: {}", student_id, limit);

    // Fetch the querying student's profile
    let query_profile = match state.supabase.get_profile(student_id).await {
        Ok(profile) => profile,
        Err(SupabaseError::NotFound(msg)) => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Student not found".to_string(),
                message: msg,
                status_code: 404,
            });
        }
        Err(e) => {
            tracing::error!("Failed to fetch profile for {}: {}", student_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch student profile".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    // Matched/blocked pairs from the event store; proceed without them
    // on failure rather than failing the whole request
    let mut exclude_ids = match state.events.excluded_ids(student_id).await {
        Ok(ids) => ids,
        Err(e) => {
            tracing::warn!(
                "Failed to fetch exclusions for {}, proceeding without: {}",
                student_id,
                e
            );
            vec![]
        }
    };
    exclude_ids.extend(req.exclude_student_ids.clone());

    // Pool scope is a policy decision, not core logic
    let college = if state.policy.same_college_only {
        query_profile.college.clone()
    } else {
        None
    };

    let pool_key = ProfileCache::pool_key(college.as_deref(), state.policy.require_verified);

    let candidates = match state.cache.get_pool(&pool_key).await {
        Some(pool) => pool,
        None => {
            let fetched = match state
                .supabase
                .list_candidates(college.as_deref(), state.policy.require_verified)
                .await
            {
                Ok(candidates) => candidates,
                Err(e) => {
                    tracing::error!("Failed to query candidates for {}: {}", student_id, e);
                    return HttpResponse::InternalServerError().json(ErrorResponse {
                        error: "Failed to query candidates".to_string(),
                        message: e.to_string(),
                        status_code: 500,
                    });
                }
            };
            state.cache.insert_pool(pool_key, fetched).await
        }
    };

    tracing::debug!("Pool of {} candidates for {}", candidates.len(), student_id);

    let filter = CandidateFilter {
        exclude_student_ids: exclude_ids,
        require_verified: state.policy.require_verified,
        college,
    };

    let outcome = state
        .matcher
        .rank(&query_profile, candidates.as_ref().clone(), &filter, limit);

    tracing::info!(
        "Returning {} roommate matches for {} (from {} candidates)",
        outcome.matches.len(),
        student_id,
        outcome.total_candidates
    );

    HttpResponse::Ok().json(FindRoommatesResponse {
        matches: outcome.matches,
        total_candidates: outcome.total_candidates,
    })
}

/// Extract roommate preferences from a free-text chat message
///
/// POST /api/v1/roommates/extract
///
/// Request body:
/// ```json
/// { "message": "I'm a night owl, pretty messy, budget around 8000" }
/// ```
async fn extract(req: web::Json<ExtractPreferencesRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let preferences = extract_preferences(&req.message);

    HttpResponse::Ok().json(ExtractPreferencesResponse {
        detected_count: preferences.detected_count(),
        preferences,
    })
}

/// Record a roommate interaction event
///
/// POST /api/v1/roommates/event
///
/// Request body:
/// ```json
/// {
///   "studentId": "string",
///   "targetStudentId": "string",
///   "eventType": "viewed|contacted|matched|blocked"
/// }
/// ```
async fn record_event(
    state: web::Data<AppState>,
    req: web::Json<RecordEventRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let event_type = match req.event_type.to_lowercase().as_str() {
        "viewed" => RoommateEventType::Viewed,
        "contacted" => RoommateEventType::Contacted,
        "matched" => RoommateEventType::Matched,
        "blocked" => RoommateEventType::Blocked,
        _ => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid event type".to_string(),
                message: "Event type must be one of: viewed, contacted, matched, blocked"
                    .to_string(),
                status_code: 400,
            });
        }
    };

    match state
        .events
        .record_event(&req.student_id, &req.target_student_id, event_type.into())
        .await
    {
        Ok(_) => {
            tracing::debug!(
                "Recorded event: {} -> {} ({})",
                req.student_id,
                req.target_student_id,
                req.event_type
            );

            HttpResponse::Ok().json(RecordEventResponse {
                success: true,
                event_id: uuid::Uuid::new_v4().to_string(),
            })
        }
        Err(e) => {
            tracing::error!("Failed to record roommate event: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to record event".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Get excluded (matched/blocked) students for a user
///
/// GET /api/v1/roommates/excluded?studentId={studentId}
///
/// For client-side synchronization and debugging.
async fn get_excluded(
    state: web::Data<AppState>,
    query: web::Query<std::collections::HashMap<String, String>>,
) -> impl Responder {
    let student_id = match query.get("studentId") {
        Some(id) => id,
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Missing studentId parameter".to_string(),
                message: "studentId query parameter is required".to_string(),
                status_code: 400,
            });
        }
    };

    match state.events.excluded_ids(student_id).await {
        Ok(ids) => HttpResponse::Ok().json(serde_json::json!({
            "studentId": student_id,
            "excludedStudentIds": ids,
            "count": ids.len(),
        })),
        Err(e) => {
            tracing::error!("Failed to fetch exclusions for {}: {}", student_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch exclusions".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
