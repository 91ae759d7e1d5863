use crate::error::{Result as ServerErrorResult, ServerError};

use sp_auth::JwtValidator;
use sp_config::Config;
use sp_realtime::{
    AppState, ConnectionConfig, ConnectionLimits, Hub, HubConfig, Metrics, ShutdownCoordinator,
};

use std::sync::Arc;

use log::{info, warn};

/// Build the JWT validator described by `config.auth`; `None` when
/// authentication is disabled
pub fn build_jwt_validator(config: &Config) -> ServerErrorResult<Option<Arc<JwtValidator>>> {
    if !config.auth.enabled {
        warn!("Authentication DISABLED - streams identify users by the user_id parameter");
        return Ok(None);
    }

    let validator = if let Some(ref secret) = config.auth.jwt_secret {
        info!("JWT: HS256 authentication enabled");
        JwtValidator::with_hs256(secret.as_bytes())
    } else if let Some(key_path) = config.jwt_public_key_path()? {
        let public_key =
            std::fs::read_to_string(&key_path).map_err(|e| ServerError::JwtKeyFile {
                path: key_path.display().to_string(),
                source: e,
            })?;
        info!("JWT: RS256 authentication enabled");
        JwtValidator::with_rs256(&public_key)?
    } else {
        return Err(ServerError::MissingJwtConfig);
    };

    Ok(Some(Arc::new(validator)))
}

/// Wire the hub, publisher and stream settings from configuration
pub fn build_app_state(config: &Config, shutdown: ShutdownCoordinator) -> ServerErrorResult<AppState> {
    let jwt_validator = build_jwt_validator(config)?;
    let metrics = Metrics::new();
    let hub = Hub::new(HubConfig::from(&config.stream), metrics.clone());

    Ok(AppState::new(
        hub,
        jwt_validator,
        ConnectionLimits {
            max_total: config.server.max_streams,
        },
        ConnectionConfig::from(&config.stream),
        metrics,
        shutdown,
    ))
}
