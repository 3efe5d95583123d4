use tm_core::{Notification, NotificationKind};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NotificationDto {
    pub id: String,
    pub sender_id: String,
    pub recipient_id: String,
    pub kind: NotificationKind,
    pub message: String,
    pub is_read: bool,
    pub created_at: i64,
}

impl From<Notification> for NotificationDto {
    fn from(n: Notification) -> Self {
        Self {
            id: n.id.to_string(),
            sender_id: n.sender_id.to_string(),
            recipient_id: n.recipient_id.to_string(),
            kind: n.kind,
            message: n.message,
            is_read: n.is_read,
            created_at: n.created_at.timestamp(),
        }
    }
}
