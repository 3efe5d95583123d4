use crate::NotificationDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NotificationResponse {
    pub notification: NotificationDto,
}
