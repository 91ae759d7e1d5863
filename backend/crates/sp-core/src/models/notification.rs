use crate::{NotificationType, UserId};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    /// Owner of the notification (the user who gets pushed)
    pub user_id: UserId,
    /// User whose action produced the notification, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor_id: Option<UserId>,
    pub notification_type: NotificationType,
    /// Post, comment, community or conversation the notification points at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<i64>,

    pub message: String,
    pub is_read: bool,

    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(
        id: i64,
        user_id: UserId,
        notification_type: NotificationType,
        message: String,
    ) -> Self {
        Self {
            id,
            user_id,
            actor_id: None,
            notification_type,
            entity_id: None,
            message,
            is_read: false,
            created_at: Utc::now(),
        }
    }

    pub fn with_actor(mut self, actor_id: UserId) -> Self {
        self.actor_id = Some(actor_id);
        self
    }

    pub fn with_entity(mut self, entity_id: i64) -> Self {
        self.entity_id = Some(entity_id);
        self
    }
}
