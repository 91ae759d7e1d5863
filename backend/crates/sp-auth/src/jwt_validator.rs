use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Clock skew tolerated on `exp` and `nbf`
pub const CLOCK_SKEW_LEEWAY_SECS: u64 = 30;

/// Checks stream tokens against a single key. One validator is built at
/// startup and shared by every stream request.
pub struct JwtValidator {
    key: DecodingKey,
    rules: Validation,
}

impl JwtValidator {
    /// Shared-secret tokens
    pub fn with_hs256(secret: &[u8]) -> Self {
        Self::from_key(DecodingKey::from_secret(secret), Algorithm::HS256)
    }

    /// Tokens signed by the identity service's RSA key; `public_key_pem` is
    /// the PEM text, not a path
    #[track_caller]
    pub fn with_rs256(public_key_pem: &str) -> AuthErrorResult<Self> {
        let location = ErrorLocation::from(Location::caller());

        match DecodingKey::from_rsa_pem(public_key_pem.as_bytes()) {
            Ok(key) => Ok(Self::from_key(key, Algorithm::RS256)),
            Err(e) => Err(AuthError::InvalidToken {
                message: format!("Invalid RSA public key: {e}"),
                location,
            }),
        }
    }

    fn from_key(key: DecodingKey, algorithm: Algorithm) -> Self {
        let mut rules = Validation::new(algorithm);
        rules.leeway = CLOCK_SKEW_LEEWAY_SECS;
        rules.validate_nbf = true;

        Self { key, rules }
    }

    /// Verify signature and expiry, then require a subject that parses as a
    /// user id
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        let location = ErrorLocation::from(Location::caller());

        let claims = decode::<Claims>(token, &self.key, &self.rules)
            .map_err(|e| rejection(e, location))?
            .claims;
        claims.validate()?;

        Ok(claims)
    }

    /// Algorithm name for the startup log
    pub fn algorithm(&self) -> &'static str {
        match self.rules.algorithms.first() {
            Some(Algorithm::HS256) => "HS256",
            Some(Algorithm::RS256) => "RS256",
            _ => "unknown",
        }
    }
}

// Expiry gets its own code so clients know to refresh rather than re-login.
fn rejection(e: JwtError, location: ErrorLocation) -> AuthError {
    match e.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired { location },
        _ => AuthError::JwtDecode {
            source: e,
            location,
        },
    }
}
