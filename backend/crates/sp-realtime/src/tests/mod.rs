mod shutdown;

use crate::{Envelope, EventData, EventKind, Hub, HubConfig, Metrics};

use sp_core::{ConversationId, ConversationUpdate, Message, UserId};

pub(crate) fn hub_with_capacity(queue_capacity: usize) -> Hub {
    Hub::new(HubConfig { queue_capacity }, Metrics::new())
}

pub(crate) fn message(id: i64, conversation: i64, sender: i64, recipient: i64) -> Message {
    Message::new(
        id,
        ConversationId::new(conversation),
        UserId::new(sender),
        UserId::new(recipient),
        format!("message {id}"),
    )
}

pub(crate) fn message_envelope(id: i64, conversation: i64) -> Envelope {
    Envelope::new_message(message(id, conversation, 1, 2))
}

pub(crate) fn update_envelope(conversation: i64, participants: &[i64]) -> Envelope {
    Envelope::conversation_updated(ConversationUpdate::new(
        ConversationId::new(conversation),
        participants.iter().copied().map(UserId::new).collect(),
    ))
}

/// Payload whose serialization always fails
#[derive(Debug)]
pub(crate) struct UnserializablePayload;

impl EventData for UnserializablePayload {
    fn to_json(&self) -> serde_json::Result<String> {
        Err(serde::ser::Error::custom("payload refuses to serialize"))
    }
}

pub(crate) fn broken_envelope() -> Envelope {
    Envelope::new(EventKind::NewNotification, UnserializablePayload)
}
