use crate::{
    ConnectionConfig, ConnectionLimits, EventDispatcher, EventPublisher, Hub, Metrics,
    ShutdownCoordinator,
};

use sp_auth::JwtValidator;

use std::sync::Arc;

/// Shared application state for stream handlers
#[derive(Clone)]
pub struct AppState {
    pub hub: Hub,
    pub publisher: EventPublisher,
    /// `None` disables authentication (development mode)
    pub jwt_validator: Option<Arc<JwtValidator>>,
    pub limits: ConnectionLimits,
    pub config: ConnectionConfig,
    pub metrics: Metrics,
    pub shutdown: ShutdownCoordinator,
}

impl AppState {
    pub fn new(
        hub: Hub,
        jwt_validator: Option<Arc<JwtValidator>>,
        limits: ConnectionLimits,
        config: ConnectionConfig,
        metrics: Metrics,
        shutdown: ShutdownCoordinator,
    ) -> Self {
        let publisher = EventPublisher::new(EventDispatcher::new(hub.clone()));

        Self {
            hub,
            publisher,
            jwt_validator,
            limits,
            config,
            metrics,
            shutdown,
        }
    }

    pub fn auth_enabled(&self) -> bool {
        self.jwt_validator.is_some()
    }
}
