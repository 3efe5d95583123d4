use crate::ApiResult;
use crate::api::profiles::profile_input::{clean_text, parse_experience_level, parse_role};

use tm_core::Profile;

use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Default, Deserialize)]
pub struct CreateProfileRequest {
    /// "beginner", "intermediate" or "expert"
    #[serde(default)]
    pub experience_level: Option<String>,

    /// "front-end", "back-end", "data-science" or "business"
    #[serde(default)]
    pub primary_role: Option<String>,

    #[serde(default)]
    pub secondary_role: Option<String>,

    #[serde(default)]
    pub primary_languages: Vec<String>,

    #[serde(default)]
    pub secondary_languages: Vec<String>,

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

impl CreateProfileRequest {
    pub fn into_profile(self, user_id: Uuid, display_name: String) -> ApiResult<Profile> {
        let mut profile = Profile::new(user_id, display_name);

        profile.experience_level = parse_experience_level(self.experience_level.as_deref())?;
        profile.primary_role = parse_role(self.primary_role.as_deref())?;
        profile.secondary_role = parse_role(self.secondary_role.as_deref())?;
        profile.primary_languages = Profile::normalize_languages(self.primary_languages);
        profile.secondary_languages = Profile::normalize_languages(self.secondary_languages);
        profile.school = clean_text(self.school);
        profile.goal = clean_text(self.goal);
        profile.pronouns = clean_text(self.pronouns);
        profile.note = clean_text(self.note);
        profile.personality_trait = clean_text(self.personality_trait);
        profile.discord_link = clean_text(self.discord_link);
        profile.image_link = clean_text(self.image_link);

        Ok(profile)
    }
}
