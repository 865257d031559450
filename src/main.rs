use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use roomies_match::config::Settings;
use roomies_match::core::RoommateMatcher;
use roomies_match::models::ScoringPoints;
use roomies_match::routes;
use roomies_match::routes::roommates::{AppState, MatchPolicy};
use roomies_match::services::{MatchEventStore, ProfileCache, SupabaseClient};
use std::sync::Arc;
use tracing::{error, info};

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap())
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Roomies matching service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Initialize Supabase client
    let supabase = Arc::new(SupabaseClient::new(
        settings.supabase.url,
        settings.supabase.api_key,
        settings.supabase.students_table,
    ));

    info!("Supabase client initialized");

    // Initialize candidate pool cache
    let cache_ttl = settings.cache.ttl_secs.unwrap_or(300);
    let cache_capacity = settings.cache.max_capacity.unwrap_or(100);

    let cache = Arc::new(ProfileCache::new(cache_capacity, cache_ttl));

    info!("Candidate pool cache initialized ({} entries, TTL: {}s)", cache_capacity, cache_ttl);

    // Initialize the match event store
    let events = Arc::new(
        MatchEventStore::from_settings(
            &settings.database.url,
            settings.database.max_connections,
            settings.database.min_connections,
        )
        .await
        .unwrap_or_else(|e| {
            error!("Failed to connect to PostgreSQL: {}", e);
            panic!("PostgreSQL connection error: {}", e);
        }),
    );

    info!("Match event store initialized");

    // Initialize matcher with configured point values
    let points = ScoringPoints {
        exact: settings.scoring.points.exact,
        partial: settings.scoring.points.partial,
        budget_adjacent: settings.scoring.points.budget_adjacent,
    };

    let matcher = RoommateMatcher::new(points);

    info!("Matcher initialized with points: {:?}", points);

    let policy = MatchPolicy {
        require_verified: settings.matching.require_verified,
        same_college_only: settings.matching.same_college_only,
        max_limit: settings.matching.max_limit,
    };

    info!("Pool policy: {:?}", policy);

    // Build application state
    let app_state = AppState {
        supabase,
        events,
        cache,
        matcher,
        policy,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
