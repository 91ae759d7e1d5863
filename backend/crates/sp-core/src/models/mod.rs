pub mod conversation_id;
pub mod conversation_update;
pub mod message;
pub mod notification;
pub mod notification_type;
pub mod user_id;
