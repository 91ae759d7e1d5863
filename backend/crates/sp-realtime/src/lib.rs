pub mod app_state;
pub mod broadcast_report;
pub mod connection_config;
pub mod connection_limits;
pub mod dispatcher;
pub mod envelope;
pub mod error;
pub mod event_kind;
pub mod handle_id;
pub mod handlers;
pub mod hub;
pub mod hub_config;
pub mod metrics;
pub mod publisher;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
pub mod stream_connection;
pub mod stream_filter;
pub mod stream_frame;
pub mod subscriber_handle;

pub use app_state::AppState;
pub use broadcast_report::BroadcastReport;
pub use connection_config::ConnectionConfig;
pub use connection_limits::ConnectionLimits;
pub use dispatcher::EventDispatcher;
pub use envelope::{Envelope, EventData};
pub use error::{RealtimeError, Result};
pub use event_kind::EventKind;
pub use handle_id::HandleId;
pub use handlers::identity::{StreamQuery, extract_user_id};
pub use handlers::stream::{conversation_stream_handler, stream_handler, stream_routes};
pub use hub::Hub;
pub use hub_config::HubConfig;
pub use metrics::Metrics;
pub use publisher::EventPublisher;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use stream_connection::{LoopExit, StreamConnection};
pub use stream_filter::StreamFilter;
pub use stream_frame::{CONNECTED_EVENT, PING_EVENT, StreamFrame};
pub use subscriber_handle::SubscriberHandle;

#[cfg(test)]
mod tests;

use sp_core::UserId;

use tracing::info_span;

/// Create a tracing span for one event stream.
/// All log entries emitted by the connection loop carry these fields.
pub fn create_stream_span(user_id: UserId, filter: &StreamFilter) -> tracing::Span {
    info_span!(
        "event_stream",
        user_id = %user_id,
        stream = %filter,
    )
}
