use crate::{ConversationId, Message, UserId};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of a conversation after its state changed (new message, read marker)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationUpdate {
    pub conversation_id: ConversationId,
    pub participant_ids: Vec<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_message: Option<Message>,
    pub unread_count: i64,
    pub updated_at: DateTime<Utc>,
}

impl ConversationUpdate {
    pub fn new(conversation_id: ConversationId, participant_ids: Vec<UserId>) -> Self {
        Self {
            conversation_id,
            participant_ids,
            last_message: None,
            unread_count: 0,
            updated_at: Utc::now(),
        }
    }

    pub fn with_last_message(mut self, message: Message) -> Self {
        self.updated_at = message.created_at;
        self.last_message = Some(message);
        self
    }

    pub fn with_unread_count(mut self, unread_count: i64) -> Self {
        self.unread_count = unread_count;
        self
    }
}
