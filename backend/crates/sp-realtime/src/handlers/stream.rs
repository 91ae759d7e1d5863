use crate::{
    AppState, Result as RealtimeErrorResult, RealtimeError, StreamConnection, StreamFilter,
    create_stream_span, handlers::identity::StreamQuery,
};

use sp_core::{ConversationId, UserId};

use std::convert::Infallible;
use std::str::FromStr;

use axum::{
    Router,
    extract::{Path, Query, State},
    http::HeaderMap,
    response::sse::{Event, Sse},
    routing::get,
};
use futures::{Stream, StreamExt};
use log::debug;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::Instrument;

/// Routes serving event streams
pub fn stream_routes() -> Router<AppState> {
    Router::new()
        .route("/stream", get(stream_handler))
        .route(
            "/stream/conversations/{conversation_id}",
            get(conversation_stream_handler),
        )
}

/// Every event addressed to the caller
pub async fn stream_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<StreamQuery>,
) -> RealtimeErrorResult<Sse<impl Stream<Item = Result<Event, Infallible>>>> {
    let user_id = authenticate(&state, &headers, &query)?;
    open_stream(&state, user_id, StreamFilter::All)
}

/// Only events belonging to one conversation
pub async fn conversation_stream_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(conversation_id): Path<String>,
    Query(query): Query<StreamQuery>,
) -> RealtimeErrorResult<Sse<impl Stream<Item = Result<Event, Infallible>>>> {
    let conversation_id = ConversationId::from_str(&conversation_id).map_err(|_| {
        RealtimeError::invalid_request(
            format!("conversation id must be a positive integer, got '{conversation_id}'"),
            Some("conversation_id"),
        )
    })?;

    let user_id = authenticate(&state, &headers, &query)?;
    open_stream(&state, user_id, StreamFilter::Conversation(conversation_id))
}

fn authenticate(
    state: &AppState,
    headers: &HeaderMap,
    query: &StreamQuery,
) -> RealtimeErrorResult<UserId> {
    crate::extract_user_id(headers, query, state.jwt_validator.as_deref()).inspect_err(|_| {
        state.metrics.connection_rejected("auth");
    })
}

/// Register a handle, start its loop, and wire the loop's frames into the
/// response body
fn open_stream(
    state: &AppState,
    user_id: UserId,
    filter: StreamFilter,
) -> RealtimeErrorResult<Sse<impl Stream<Item = Result<Event, Infallible>> + use<>>> {
    let handle = state
        .hub
        .try_register(user_id, state.limits.max_total)
        .inspect_err(|_| state.metrics.connection_rejected("limit"))?;

    debug!("Opening stream {} for user {user_id}", handle.id());

    let (transport, frames) = mpsc::channel(state.config.transport_buffer_size.max(1));
    let connection = StreamConnection::new(
        handle,
        filter,
        state.config.clone(),
        state.metrics.clone(),
    );
    let shutdown_guard = state.shutdown.subscribe_guard();

    tokio::spawn(
        connection
            .run(transport, shutdown_guard)
            .instrument(create_stream_span(user_id, &filter)),
    );

    let body =
        ReceiverStream::new(frames).map(|frame| Ok::<_, Infallible>(frame.into_sse_event()));

    Ok(Sse::new(body))
}
