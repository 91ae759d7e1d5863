use crate::EventKind;

use sp_auth::AuthError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RealtimeError {
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        code: &'static str,
        location: ErrorLocation,
    },

    #[error("Invalid request: {message} {location}")]
    InvalidRequest {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Stream limit exceeded: {current} streams (max: {max}) {location}")]
    StreamLimitExceeded {
        current: usize,
        max: usize,
        location: ErrorLocation,
    },

    #[error("Failed to serialize {kind} payload: {source} {location}")]
    Serialization {
        kind: EventKind,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl RealtimeError {
    #[track_caller]
    pub fn invalid_request(message: impl Into<String>, field: Option<&str>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Machine-readable code for client responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized { code, .. } => *code,
            Self::InvalidRequest { .. } => "INVALID_REQUEST",
            Self::StreamLimitExceeded { .. } => "STREAM_LIMIT",
            Self::Serialization { .. } => "SERIALIZATION_ERROR",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            Self::StreamLimitExceeded { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Serialization { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show a client (no source locations)
    fn client_message(&self) -> String {
        match self {
            Self::Unauthorized { message, .. } | Self::InvalidRequest { message, .. } => {
                message.clone()
            }
            Self::StreamLimitExceeded { max, .. } => {
                format!("Too many open streams (max: {max})")
            }
            Self::Serialization { .. } => "Internal server error".to_string(),
        }
    }
}

impl From<AuthError> for RealtimeError {
    #[track_caller]
    fn from(err: AuthError) -> Self {
        let message = match &err {
            AuthError::TokenExpired { .. } => "Token expired".to_string(),
            AuthError::MissingHeader { .. } => "Missing authentication token".to_string(),
            AuthError::InvalidScheme { .. } => {
                "Invalid authorization scheme: expected 'Bearer'".to_string()
            }
            AuthError::InvalidClaim { claim, message, .. } => {
                format!("Invalid claim '{claim}': {message}")
            }
            AuthError::InvalidToken { .. } | AuthError::JwtDecode { .. } => {
                "Invalid token".to_string()
            }
        };

        Self::Unauthorized {
            message,
            code: err.error_code(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for RealtimeError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let mut body = json!({
            "error": {
                "code": self.error_code(),
                "message": self.client_message(),
            }
        });

        if let Self::InvalidRequest {
            field: Some(field), ..
        } = &self
        {
            body["error"]["field"] = json!(field);
        }

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, RealtimeError>;
