use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error on '{field}': {message} {location}")]
    Validation {
        field: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid experience level: {value} {location}")]
    InvalidExperienceLevel {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid notification kind: {value} {location}")]
    InvalidNotificationKind {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Field the error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            Self::InvalidExperienceLevel { .. } => Some("experience_level"),
            Self::InvalidRole { .. } => Some("role"),
            Self::InvalidNotificationKind { .. } => Some("kind"),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
