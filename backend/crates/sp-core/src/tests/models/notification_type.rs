use crate::NotificationType;

use std::str::FromStr;

#[test]
fn test_notification_type_as_str() {
    assert_eq!(NotificationType::Like.as_str(), "like");
    assert_eq!(
        NotificationType::CommunityInvite.as_str(),
        "community_invite"
    );
}

#[test]
fn test_notification_type_from_str_round_trips_every_variant() {
    for kind in [
        NotificationType::Like,
        NotificationType::Comment,
        NotificationType::Reply,
        NotificationType::Follow,
        NotificationType::Mention,
        NotificationType::Message,
        NotificationType::CommunityInvite,
    ] {
        assert_eq!(NotificationType::from_str(kind.as_str()).unwrap(), kind);
    }
    assert!(NotificationType::from_str("poke").is_err());
}

#[test]
fn test_notification_type_serde_matches_as_str() {
    let json = serde_json::to_string(&NotificationType::CommunityInvite).unwrap();
    assert_eq!(json, "\"community_invite\"");
}
