use crate::{Envelope, Result as RealtimeErrorResult};

use sp_core::UserId;

use axum::response::sse::Event;
use chrono::Utc;
use serde_json::json;

pub const CONNECTED_EVENT: &str = "connected";
pub const PING_EVENT: &str = "ping";

/// One unit written to the event stream: a tag and its JSON data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamFrame {
    pub event: &'static str,
    pub data: String,
}

impl StreamFrame {
    /// First frame of every stream
    pub fn connected(user_id: UserId) -> Self {
        Self {
            event: CONNECTED_EVENT,
            data: json!({ "user_id": user_id }).to_string(),
        }
    }

    /// Keepalive written after an idle interval
    pub fn ping() -> Self {
        Self {
            event: PING_EVENT,
            data: json!({ "timestamp": Utc::now().to_rfc3339() }).to_string(),
        }
    }

    #[track_caller]
    pub fn from_envelope(envelope: &Envelope) -> RealtimeErrorResult<Self> {
        Ok(Self {
            event: envelope.kind().as_str(),
            data: envelope.payload_json()?,
        })
    }

    pub fn into_sse_event(self) -> Event {
        Event::default().event(self.event).data(self.data)
    }
}
