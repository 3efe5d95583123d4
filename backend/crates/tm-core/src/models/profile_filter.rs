use crate::{ExperienceLevel, Profile, Role};

use uuid::Uuid;

/// Predicate for browsing profiles. All set fields must hold (AND).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFilter {
    /// Matches either the primary or the secondary role
    pub role: Option<Role>,
    /// Case-insensitive exact match against any language
    pub skill: Option<String>,
    pub experience_level: Option<ExperienceLevel>,
    /// Leave this user's profile out of the results
    pub exclude_user: Option<Uuid>,
}

impl ProfileFilter {
    /// The predicate `ProfileRepository::search` applies to every candidate row.
    /// A blank skill places no constraint.
    pub fn matches(&self, profile: &Profile) -> bool {
        if self.exclude_user == Some(profile.user_id) {
            return false;
        }

        if let Some(role) = self.role
            && !profile.has_role(role)
        {
            return false;
        }

        if let Some(skill) = self.skill_key()
            && !profile.has_skill(&skill)
        {
            return false;
        }

        if let Some(level) = self.experience_level
            && profile.experience_level != Some(level)
        {
            return false;
        }

        true
    }

    /// Normalised skill value used for lookups
    pub fn skill_key(&self) -> Option<String> {
        self.skill
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
    }
}
