pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::conversation_id::ConversationId;
pub use models::conversation_update::ConversationUpdate;
pub use models::message::Message;
pub use models::notification::Notification;
pub use models::notification_type::NotificationType;
pub use models::user_id::UserId;

#[cfg(test)]
mod tests;
