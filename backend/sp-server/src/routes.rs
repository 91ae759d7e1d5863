use crate::health;

use sp_realtime::{AppState, stream_routes};

use axum::{Router, routing::get};
use http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Event streams
        .merge(stream_routes())
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .with_state(state)
        // Browsers open streams cross-origin with EventSource
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET])
                .allow_headers([header::AUTHORIZATION, header::ACCEPT]),
        )
}
