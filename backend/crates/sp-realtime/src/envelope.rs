use crate::{EventKind, RealtimeError, Result as RealtimeErrorResult};

use sp_core::{ConversationId, ConversationUpdate, Message, Notification};

use std::fmt::Debug;
use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;

/// Payload carried by an [`Envelope`].
///
/// The hub never looks inside a payload; only the connection loop serializes
/// it, and the conversation filter asks which conversation it belongs to.
pub trait EventData: Debug + Send + Sync {
    /// JSON written as the SSE `data:` field
    fn to_json(&self) -> serde_json::Result<String>;

    /// Conversation this payload belongs to, if any
    fn conversation_id(&self) -> Option<ConversationId> {
        None
    }
}

impl EventData for Message {
    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    fn conversation_id(&self) -> Option<ConversationId> {
        Some(self.conversation_id)
    }
}

impl EventData for ConversationUpdate {
    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    fn conversation_id(&self) -> Option<ConversationId> {
        Some(self.conversation_id)
    }
}

impl EventData for Notification {
    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Immutable real-time event: a kind tag plus a shared payload.
///
/// Cloning is cheap (the payload sits behind an `Arc`), so fan-out to several
/// handles copies the envelope, never the payload.
#[derive(Debug, Clone)]
pub struct Envelope {
    kind: EventKind,
    payload: Arc<dyn EventData>,
}

impl Envelope {
    /// Kind and payload must agree; producers use the typed constructors
    pub(crate) fn new<P: EventData + 'static>(kind: EventKind, payload: P) -> Self {
        Self {
            kind,
            payload: Arc::new(payload),
        }
    }

    pub fn new_message(message: Message) -> Self {
        Self::new(EventKind::NewMessage, message)
    }

    pub fn conversation_updated(update: ConversationUpdate) -> Self {
        Self::new(EventKind::ConversationUpdated, update)
    }

    pub fn new_notification(notification: Notification) -> Self {
        Self::new(EventKind::NewNotification, notification)
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn payload(&self) -> &dyn EventData {
        self.payload.as_ref()
    }

    pub fn conversation_id(&self) -> Option<ConversationId> {
        self.payload.conversation_id()
    }

    /// Serialize the payload for the wire
    #[track_caller]
    pub fn payload_json(&self) -> RealtimeErrorResult<String> {
        self.payload
            .to_json()
            .map_err(|source| RealtimeError::Serialization {
                kind: self.kind,
                source,
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
