use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Role a hacker prefers to take on in a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    FrontEnd,
    BackEnd,
    DataScience,
    Business,
}

impl Role {
    /// Every role, in the order recommendation buckets are returned
    pub const ALL: [Role; 4] = [
        Role::FrontEnd,
        Role::BackEnd,
        Role::DataScience,
        Role::Business,
    ];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FrontEnd => "front-end",
            Self::BackEnd => "back-end",
            Self::DataScience => "data-science",
            Self::Business => "business",
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    /// Accepts the canonical kebab-case names plus the loose spellings
    /// clients tend to send ("data science", "frontend", ...).
    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "front-end" | "frontend" => Ok(Self::FrontEnd),
            "back-end" | "backend" => Ok(Self::BackEnd),
            "data-science" | "datascience" => Ok(Self::DataScience),
            "business" => Ok(Self::Business),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
