use sp_auth::JwtValidator;
use sp_realtime::{
    AppState, ConnectionConfig, ConnectionLimits, Hub, HubConfig, Metrics, ShutdownCoordinator,
    stream_routes,
};

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use tower::ServiceExt;

/// HS256 secret shared by all integration tests
pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-integration-tests-min-32-bytes-long";

/// Configuration for test app instances
#[derive(Debug, Clone)]
pub struct TestAppConfig {
    pub jwt_secret: Option<Vec<u8>>,
    pub max_streams: usize,
    pub queue_capacity: usize,
}

impl Default for TestAppConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            max_streams: 100,
            queue_capacity: 10,
        }
    }
}

impl TestAppConfig {
    pub fn with_auth() -> Self {
        Self {
            jwt_secret: Some(TEST_JWT_SECRET.to_vec()),
            ..Default::default()
        }
    }

    pub fn with_max_streams(max_streams: usize) -> Self {
        Self {
            max_streams,
            ..Default::default()
        }
    }
}

/// Router plus the state behind it
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    pub fn new(config: TestAppConfig) -> Self {
        let metrics = Metrics::new();
        let hub = Hub::new(
            HubConfig {
                queue_capacity: config.queue_capacity,
            },
            metrics.clone(),
        );
        let jwt_validator = config
            .jwt_secret
            .as_deref()
            .map(|secret| Arc::new(JwtValidator::with_hs256(secret)));

        let state = AppState::new(
            hub,
            jwt_validator,
            ConnectionLimits {
                max_total: config.max_streams,
            },
            ConnectionConfig::default(),
            metrics,
            ShutdownCoordinator::new(),
        );

        let router = stream_routes().with_state(state.clone());

        Self { router, state }
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn get_with_token(&self, uri: &str, token: &str) -> Response<Body> {
        self.send(
            Request::builder()
                .uri(uri)
                .header("Authorization", format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Wait until the hub holds exactly `expected` handles
    pub async fn wait_for_handles(&self, expected: usize) {
        let hub = self.state.hub.clone();
        tokio::time::timeout(Duration::from_secs(2), async move {
            while hub.total_handles() != expected {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .unwrap_or_else(|_| panic!("hub never reached {expected} handles"));
    }
}
