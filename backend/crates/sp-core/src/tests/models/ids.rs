use crate::{ConversationId, CoreError, UserId};

use std::str::FromStr;

#[test]
fn test_user_id_from_str() {
    assert_eq!(UserId::from_str("42").unwrap(), UserId::new(42));
    assert_eq!(UserId::from_str(" 7 ").unwrap().get(), 7);
}

#[test]
fn test_user_id_rejects_non_positive_and_garbage() {
    assert!(matches!(
        UserId::from_str("0"),
        Err(CoreError::InvalidUserId { .. })
    ));
    assert!(UserId::from_str("-3").is_err());
    assert!(UserId::from_str("abc").is_err());
    assert!(UserId::from_str("").is_err());
}

#[test]
fn test_conversation_id_from_str() {
    assert_eq!(
        ConversationId::from_str("9").unwrap(),
        ConversationId::new(9)
    );
    assert!(matches!(
        ConversationId::from_str("nine"),
        Err(CoreError::InvalidConversationId { .. })
    ));
}

#[test]
fn test_ids_serialize_as_plain_integers() {
    assert_eq!(serde_json::to_string(&UserId::new(42)).unwrap(), "42");
    assert_eq!(
        serde_json::to_string(&ConversationId::new(9)).unwrap(),
        "9"
    );
    assert_eq!(UserId::new(42).to_string(), "42");
}
