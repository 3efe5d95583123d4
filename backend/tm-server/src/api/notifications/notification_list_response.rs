use crate::NotificationDto;

use serde::Serialize;

/// Newest first
#[derive(Debug, Serialize)]
pub struct NotificationListResponse {
    pub notifications: Vec<NotificationDto>,
}
