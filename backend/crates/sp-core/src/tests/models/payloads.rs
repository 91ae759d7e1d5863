use crate::{ConversationId, ConversationUpdate, Message, Notification, NotificationType, UserId};

use serde_json::Value;

#[test]
fn test_conversation_update_with_last_message_tracks_message_time() {
    let message = Message::new(
        1,
        ConversationId::new(9),
        UserId::new(1),
        UserId::new(2),
        "hi".to_string(),
    );
    let update = ConversationUpdate::new(ConversationId::new(9), vec![UserId::new(1), UserId::new(2)])
        .with_last_message(message.clone())
        .with_unread_count(3);

    assert_eq!(update.updated_at, message.created_at);
    assert_eq!(update.unread_count, 3);
    assert_eq!(update.last_message, Some(message));
}

#[test]
fn test_conversation_update_omits_missing_last_message() {
    let update = ConversationUpdate::new(ConversationId::new(9), vec![UserId::new(1)]);
    let json: Value = serde_json::to_value(&update).unwrap();

    assert!(json.get("last_message").is_none());
    assert_eq!(json["conversation_id"], 9);
    assert_eq!(json["participant_ids"], serde_json::json!([1]));
}

#[test]
fn test_notification_json_shape() {
    let notification = Notification::new(
        5,
        UserId::new(42),
        NotificationType::Follow,
        "alice followed you".to_string(),
    )
    .with_actor(UserId::new(7));
    let json: Value = serde_json::to_value(&notification).unwrap();

    assert_eq!(json["user_id"], 42);
    assert_eq!(json["actor_id"], 7);
    assert_eq!(json["notification_type"], "follow");
    assert_eq!(json["is_read"], false);
    assert!(json.get("entity_id").is_none());
}
