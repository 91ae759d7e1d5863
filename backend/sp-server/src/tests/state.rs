use super::EnvGuard;
use crate::{ServerError, build_app_state, build_jwt_validator};

use sp_config::{Config, StreamConfig};
use sp_core::UserId;
use sp_realtime::{Envelope, ShutdownCoordinator};

use serial_test::serial;
use tempfile::TempDir;

const SECRET: &str = "server-test-secret-that-is-at-least-32-chars";

fn auth_config(secret: Option<&str>, key_path: Option<&str>) -> Config {
    let mut config = Config::default();
    config.auth.enabled = true;
    config.auth.jwt_secret = secret.map(str::to_string);
    config.auth.jwt_public_key_path = key_path.map(str::to_string);
    config
}

#[test]
fn given_auth_disabled_when_building_validator_then_none() {
    let validator = build_jwt_validator(&Config::default()).unwrap();

    assert!(validator.is_none());
}

#[test]
fn given_secret_when_building_validator_then_hs256() {
    let validator = build_jwt_validator(&auth_config(Some(SECRET), None))
        .unwrap()
        .expect("validator");

    assert_eq!(validator.algorithm(), "HS256");
}

#[test]
fn given_auth_enabled_without_keys_when_building_validator_then_error() {
    let result = build_jwt_validator(&auth_config(None, None));

    assert!(matches!(result, Err(ServerError::MissingJwtConfig)));
}

#[test]
#[serial]
fn given_missing_key_file_when_building_validator_then_key_file_error() {
    let temp = TempDir::new().unwrap();
    let _guard = EnvGuard::set("SP_CONFIG_DIR", temp.path().to_str().unwrap());

    let result = build_jwt_validator(&auth_config(None, Some("missing.pem")));

    assert!(matches!(result, Err(ServerError::JwtKeyFile { .. })));
}

#[test]
#[serial]
fn given_invalid_pem_when_building_validator_then_auth_error() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("public.pem"), "not a pem").unwrap();
    let _guard = EnvGuard::set("SP_CONFIG_DIR", temp.path().to_str().unwrap());

    let result = build_jwt_validator(&auth_config(None, Some("public.pem")));

    assert!(matches!(result, Err(ServerError::Auth(_))));
}

#[test]
fn given_stream_config_when_building_state_then_queue_capacity_applied() {
    // Given
    let mut config = Config::default();
    config.stream = StreamConfig {
        queue_capacity: 2,
        ..StreamConfig::default()
    };
    config.server.max_streams = 3;
    let state = build_app_state(&config, ShutdownCoordinator::new()).unwrap();
    let _handle = state.hub.register(UserId::new(42));

    // When
    let envelope = Envelope::new_message(sp_core::Message::new(
        1,
        sp_core::ConversationId::new(9),
        UserId::new(1),
        UserId::new(42),
        "hi".to_string(),
    ));
    let reports: Vec<_> = (0..3)
        .map(|_| state.hub.broadcast(UserId::new(42), &envelope))
        .collect();

    // Then
    assert_eq!(reports.iter().map(|r| r.delivered).sum::<usize>(), 2);
    assert_eq!(reports.iter().map(|r| r.dropped).sum::<usize>(), 1);
    assert_eq!(state.limits.max_total, 3);
    assert!(!state.auth_enabled());
}
