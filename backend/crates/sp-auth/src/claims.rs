use crate::{AuthError, Result as AuthErrorResult};

use sp_core::UserId;

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// JWT Claims structure - matches platform JWT format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (numeric user id, as a string)
    pub sub: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        self.user_id().map(|_| ())
    }

    /// The user the token was issued for
    #[track_caller]
    pub fn user_id(&self) -> AuthErrorResult<UserId> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (user_id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        UserId::from_str(&self.sub).map_err(|_| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: format!("sub must be a positive integer user id, got '{}'", self.sub),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
