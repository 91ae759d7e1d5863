use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Serialize;

/// JWT claims matching the platform's token format
#[derive(Debug, Serialize)]
pub struct TestJwtClaims {
    pub sub: String,
    pub exp: u64,
    pub iat: u64,
}

/// Create a valid HS256 token for `user_id`
pub fn create_test_token(user_id: i64, jwt_secret: &[u8]) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs();

    let claims = TestJwtClaims {
        sub: user_id.to_string(),
        exp: now + Duration::from_secs(3600).as_secs(),
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret),
    )
    .expect("Failed to encode JWT")
}
