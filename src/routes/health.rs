use crate::{
    AppState,
    dto::HealthResponse,
    errors::ApiError,
    routes::json_response,
    uptime::{rfc3339, uptime},
};
use axum::{extract::State, http::StatusCode, response::Response};
use chrono::Utc;

/// GET /health
/// Response: 200 OK with JSON
///
/// Liveness only: if the process can answer, it is healthy. No downstream
/// dependencies are checked.
pub async fn health_check(State(state): State<AppState>) -> Result<Response, ApiError> {
    let now = Utc::now();

    json_response(
        StatusCode::OK,
        &HealthResponse {
            status: "healthy".to_string(),
            timestamp: rfc3339(now),
            uptime_seconds: uptime(state.started_at, now).seconds,
        },
    )
}
