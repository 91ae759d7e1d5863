use crate::{RealtimeError, Result as RealtimeErrorResult};

use sp_auth::{JwtValidator, extract_bearer_token};
use sp_core::UserId;

use std::str::FromStr;

use axum::http::{HeaderMap, header::AUTHORIZATION};
use log::warn;
use serde::Deserialize;

/// Query parameters accepted by the stream endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StreamQuery {
    /// JWT for clients that cannot set headers (browser `EventSource`)
    pub token: Option<String>,
    /// Caller identity when authentication is disabled
    pub user_id: Option<String>,
}

/// Resolve the user a stream belongs to.
///
/// With a validator, the identity comes from a JWT in the `Authorization`
/// header (preferred) or the `token` query parameter, and `user_id` is
/// rejected. Without one, `user_id` is required.
pub fn extract_user_id(
    headers: &HeaderMap,
    query: &StreamQuery,
    validator: Option<&JwtValidator>,
) -> RealtimeErrorResult<UserId> {
    match validator {
        Some(validator) => user_id_from_token(headers, query, validator),
        None => user_id_from_query(query),
    }
}

fn user_id_from_token(
    headers: &HeaderMap,
    query: &StreamQuery,
    validator: &JwtValidator,
) -> RealtimeErrorResult<UserId> {
    if query.user_id.is_some() {
        warn!("Rejected user_id parameter while authentication is enabled");
        return Err(RealtimeError::invalid_request(
            "user_id is not accepted when authentication is enabled",
            Some("user_id"),
        ));
    }

    let header = headers.get(AUTHORIZATION).and_then(|h| h.to_str().ok());
    let query_token = query.token.as_deref().map(str::trim).filter(|t| !t.is_empty());

    let token = match (header, query_token) {
        (None, Some(token)) => token,
        (header, _) => extract_bearer_token(header).inspect_err(|e| {
            warn!("Stream authentication failed: {e}");
        })?,
    };

    let claims = validator.validate(token).inspect_err(|e| {
        warn!("JWT validation failed: {e}");
    })?;

    Ok(claims.user_id()?)
}

fn user_id_from_query(query: &StreamQuery) -> RealtimeErrorResult<UserId> {
    let raw = query.user_id.as_deref().ok_or_else(|| {
        RealtimeError::invalid_request("user_id query parameter is required", Some("user_id"))
    })?;

    UserId::from_str(raw).map_err(|_| {
        RealtimeError::invalid_request(
            format!("user_id must be a positive integer, got '{raw}'"),
            Some("user_id"),
        )
    })
}
