use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    /// A unique constraint rejected the write
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// A referenced row does not exist
    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if let sqlx::Error::Database(ref db) = source {
            if db.is_unique_violation() {
                return Self::Conflict {
                    message: db.message().to_string(),
                    location,
                };
            }
            if db.is_foreign_key_violation() {
                return Self::NotFound {
                    message: db.message().to_string(),
                    location,
                };
            }
        }

        Self::Sqlx { source, location }
    }
}

impl DbError {
    /// Error for a stored value that cannot be mapped back to a domain type
    #[track_caller]
    pub fn corrupt<S: Into<String>>(message: S) -> Self {
        Self::Initialization {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
