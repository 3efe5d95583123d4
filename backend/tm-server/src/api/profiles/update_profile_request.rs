use crate::ApiResult;
use crate::api::profiles::profile_input::{clean_text, parse_experience_level, parse_role};

use tm_core::Profile;

use serde::Deserialize;

/// Partial update: absent fields stay as they are, blank strings clear
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub experience_level: Option<String>,

    #[serde(default)]
    pub primary_role: Option<String>,

    #[serde(default)]
    pub secondary_role: Option<String>,

    #[serde(default)]
    pub primary_languages: Option<Vec<String>>,

    #[serde(default)]
    pub secondary_languages: Option<Vec<String>>,

    #[serde(default)]
    pub school: Option<String>,

    #[serde(default)]
    pub goal: Option<String>,

    #[serde(default)]
    pub pronouns: Option<String>,

    #[serde(default)]
    pub note: Option<String>,

    #[serde(default)]
    pub personality_trait: Option<String>,

    #[serde(default)]
    pub discord_link: Option<String>,

    #[serde(default)]
    pub image_link: Option<String>,
}

impl UpdateProfileRequest {
    pub fn apply(self, profile: &mut Profile) -> ApiResult<()> {
        if let Some(ref level) = self.experience_level {
            profile.experience_level = parse_experience_level(Some(level.as_str()))?;
        }
        if let Some(ref role) = self.primary_role {
            profile.primary_role = parse_role(Some(role.as_str()))?;
        }
        if let Some(ref role) = self.secondary_role {
            profile.secondary_role = parse_role(Some(role.as_str()))?;
        }
        if let Some(languages) = self.primary_languages {
            profile.primary_languages = Profile::normalize_languages(languages);
        }
        if let Some(languages) = self.secondary_languages {
            profile.secondary_languages = Profile::normalize_languages(languages);
        }

        for (target, value) in [
            (&mut profile.school, self.school),
            (&mut profile.goal, self.goal),
            (&mut profile.pronouns, self.pronouns),
            (&mut profile.note, self.note),
            (&mut profile.personality_trait, self.personality_trait),
            (&mut profile.discord_link, self.discord_link),
            (&mut profile.image_link, self.image_link),
        ] {
            if value.is_some() {
                *target = clean_text(value);
            }
        }

        Ok(())
    }
}
