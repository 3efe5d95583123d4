use crate::{CoreError, NotificationKind, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub recipient_id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// `sender` would like to team up with `recipient`
    #[track_caller]
    pub fn interest(sender: Uuid, recipient: Uuid, message: String) -> CoreErrorResult<Self> {
        Self::build(sender, recipient, NotificationKind::Interest, message)
    }

    /// Tells `recipient` that their interest in `sender` is now mutual
    #[track_caller]
    pub fn match_confirmed(sender: Uuid, recipient: Uuid, message: String) -> CoreErrorResult<Self> {
        Self::build(sender, recipient, NotificationKind::MatchConfirmed, message)
    }

    pub fn default_interest_message(sender_name: &str) -> String {
        format!("{} is interested in teaming up", sender_name)
    }

    pub fn default_match_message(partner_name: &str) -> String {
        format!("You and {} are now teammates", partner_name)
    }

    #[track_caller]
    fn build(
        sender: Uuid,
        recipient: Uuid,
        kind: NotificationKind,
        message: String,
    ) -> CoreErrorResult<Self> {
        if sender == recipient {
            return Err(CoreError::Validation {
                field: "recipient_id".to_string(),
                message: "cannot send a notification to yourself".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            id: Uuid::new_v4(),
            sender_id: sender,
            recipient_id: recipient,
            kind,
            message,
            is_read: false,
            created_at: Utc::now(),
        })
    }
}
