use sp_realtime::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Component status with live stream counts
pub async fn health(State(state): State<AppState>) -> Response {
    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "hub": "operational",
            "auth": if state.auth_enabled() { "enabled" } else { "disabled" },
        },
        "streams": {
            "active": state.hub.total_handles(),
            "users": state.hub.user_count(),
            "max": state.limits.max_total,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness check (is the process alive?)
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness check; not ready while the stream limit is reached
pub async fn readiness(State(state): State<AppState>) -> Response {
    if state.hub.total_handles() >= state.limits.max_total {
        return (StatusCode::SERVICE_UNAVAILABLE, "At stream capacity").into_response();
    }

    (StatusCode::OK, "Ready").into_response()
}
