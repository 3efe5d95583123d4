use crate::NotificationDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ExpressInterestResponse {
    /// The interest notification delivered to the recipient
    pub notification: NotificationDto,
    /// True when the recipient had already expressed interest back
    pub matched: bool,
}
