use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Two users whose interest in each other is mutual.
/// The pair is stored once, ordered so that `user_a < user_b`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMatch {
    pub user_a: Uuid,
    pub user_b: Uuid,
    pub created_at: DateTime<Utc>,
}

impl TeamMatch {
    #[track_caller]
    pub fn new(first: Uuid, second: Uuid) -> CoreErrorResult<Self> {
        if first == second {
            return Err(CoreError::Validation {
                field: "user_id".to_string(),
                message: "a user cannot be matched with themselves".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let (user_a, user_b) = if first < second {
            (first, second)
        } else {
            (second, first)
        };

        Ok(Self {
            user_a,
            user_b,
            created_at: Utc::now(),
        })
    }

    pub fn involves(&self, user_id: Uuid) -> bool {
        self.user_a == user_id || self.user_b == user_id
    }

    /// The partner of `user_id`, or None if `user_id` is not part of this match
    pub fn other(&self, user_id: Uuid) -> Option<Uuid> {
        if self.user_a == user_id {
            Some(self.user_b)
        } else if self.user_b == user_id {
            Some(self.user_a)
        } else {
            None
        }
    }
}
