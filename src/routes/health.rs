use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::routes::AppState;

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
/// Always ready; reports whether notifications can be delivered so a missing
/// provider key shows up before the first submission fails.
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let email = if state.intake.is_configured() {
        "configured"
    } else {
        tracing::warn!("Readiness check: email provider key is not set");
        "not_configured"
    };

    (StatusCode::OK, Json(json!({"status": "ready", "email": email})))
}
