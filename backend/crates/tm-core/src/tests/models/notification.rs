use crate::{CoreError, Notification, NotificationKind};

use std::str::FromStr;

use uuid::Uuid;

#[test]
fn test_interest_notification_starts_unread() {
    let sender = Uuid::new_v4();
    let recipient = Uuid::new_v4();
    let n = Notification::interest(sender, recipient, "hi".to_string()).unwrap();

    assert_eq!(n.sender_id, sender);
    assert_eq!(n.recipient_id, recipient);
    assert_eq!(n.kind, NotificationKind::Interest);
    assert!(!n.is_read);
}

#[test]
fn test_notification_to_self_is_rejected() {
    let id = Uuid::new_v4();
    let err = Notification::match_confirmed(id, id, "x".to_string()).unwrap_err();

    assert!(matches!(err, CoreError::Validation { .. }));
    assert_eq!(err.field(), Some("recipient_id"));
}

#[test]
fn test_default_messages() {
    assert_eq!(
        Notification::default_interest_message("Ada Lovelace"),
        "Ada Lovelace is interested in teaming up"
    );
    assert_eq!(
        Notification::default_match_message("Ada Lovelace"),
        "You and Ada Lovelace are now teammates"
    );
}

#[test]
fn test_notification_kind_from_str() {
    assert_eq!(
        NotificationKind::from_str("match_confirmed").unwrap(),
        NotificationKind::MatchConfirmed
    );
    assert!(NotificationKind::from_str("Interest").is_err());
}
