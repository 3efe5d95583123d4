//! Profile entity - what a user tells other hackers about themselves.
//!
//! Each user owns at most one profile. The profile carries the fields that
//! browsing, search and recommendations work from: experience level,
//! preferred roles and the languages the user is comfortable with.

use crate::{ExperienceLevel, Role};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Copied from the owner's first and last name when the profile is created
    pub display_name: String,
    pub experience_level: Option<ExperienceLevel>,
    pub primary_role: Option<Role>,
    pub secondary_role: Option<Role>,
    /// Strongest languages, related to the primary role
    pub primary_languages: Vec<String>,
    /// Other languages, related to the secondary role
    pub secondary_languages: Vec<String>,
    pub school: Option<String>,
    pub goal: Option<String>,
    pub pronouns: Option<String>,
    pub note: Option<String>,
    pub personality_trait: Option<String>,
    pub discord_link: Option<String>,
    pub image_link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Create an empty profile for a user
    pub fn new(user_id: Uuid, display_name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            display_name,
            experience_level: None,
            primary_role: None,
            secondary_role: None,
            primary_languages: Vec::new(),
            secondary_languages: Vec::new(),
            school: None,
            goal: None,
            pronouns: None,
            note: None,
            personality_trait: None,
            discord_link: None,
            image_link: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Primary languages followed by secondary languages
    pub fn skills(&self) -> impl Iterator<Item = &str> {
        self.primary_languages
            .iter()
            .chain(self.secondary_languages.iter())
            .map(String::as_str)
    }

    /// Case-insensitive exact membership in either language list
    pub fn has_skill(&self, skill: &str) -> bool {
        let needle = skill.trim().to_lowercase();
        self.skills().any(|s| s.trim().to_lowercase() == needle)
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.primary_role == Some(role) || self.secondary_role == Some(role)
    }

    /// Trim entries, drop empty ones and remove case-insensitive duplicates.
    /// The first spelling of a duplicate wins.
    pub fn normalize_languages(languages: Vec<String>) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        languages
            .into_iter()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .filter(|l| seen.insert(l.to_lowercase()))
            .collect()
    }
}
