use crate::{ConversationId, UserId};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted direct message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub conversation_id: ConversationId,
    pub sender_id: UserId,
    pub recipient_id: UserId,

    pub content: String,

    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(
        id: i64,
        conversation_id: ConversationId,
        sender_id: UserId,
        recipient_id: UserId,
        content: String,
    ) -> Self {
        Self {
            id,
            conversation_id,
            sender_id,
            recipient_id,
            content,
            created_at: Utc::now(),
        }
    }
}
