use crate::{BroadcastReport, Envelope, EventDispatcher};

use sp_core::{ConversationUpdate, Message, Notification, UserId};

use log::debug;
use tokio::task::JoinHandle;

/// Picks recipients for domain events and hands envelopes to the dispatcher.
/// Call only after the originating write has committed.
#[derive(Clone)]
pub struct EventPublisher {
    dispatcher: EventDispatcher,
}

impl EventPublisher {
    pub fn new(dispatcher: EventDispatcher) -> Self {
        Self { dispatcher }
    }

    /// `new_message` to the recipient only; `conversation_updated` to both
    /// sender and recipient
    pub fn message_sent(
        &self,
        message: &Message,
        update: &ConversationUpdate,
    ) -> Vec<JoinHandle<BroadcastReport>> {
        debug!(
            "Publishing message {} in conversation {}",
            message.id, message.conversation_id
        );

        let new_message = Envelope::new_message(message.clone());
        let updated = Envelope::conversation_updated(update.clone());

        let mut deliveries = vec![(message.recipient_id, new_message)];
        deliveries.extend(
            unique([message.sender_id, message.recipient_id])
                .into_iter()
                .map(|user_id| (user_id, updated.clone())),
        );

        self.dispatcher.dispatch_all(deliveries)
    }

    /// `conversation_updated` to every participant
    pub fn conversation_updated(
        &self,
        update: &ConversationUpdate,
    ) -> Vec<JoinHandle<BroadcastReport>> {
        let envelope = Envelope::conversation_updated(update.clone());

        self.dispatcher.dispatch_all(
            unique(update.participant_ids.iter().copied())
                .into_iter()
                .map(|user_id| (user_id, envelope.clone())),
        )
    }

    /// `new_notification` to the notification's owner
    pub fn notification_created(
        &self,
        notification: &Notification,
    ) -> JoinHandle<BroadcastReport> {
        self.dispatcher.dispatch(
            notification.user_id,
            Envelope::new_notification(notification.clone()),
        )
    }
}

/// Recipients in first-seen order, each once
fn unique(user_ids: impl IntoIterator<Item = UserId>) -> Vec<UserId> {
    let mut seen = Vec::new();
    for user_id in user_ids {
        if !seen.contains(&user_id) {
            seen.push(user_id);
        }
    }
    seen
}
