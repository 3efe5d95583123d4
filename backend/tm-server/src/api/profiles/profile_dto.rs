use tm_core::{ExperienceLevel, Profile, Role};

use serde::Serialize;

/// Profile DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct ProfileDto {
    pub id: String,
    pub user_id: String,
    pub display_name: String,
    pub experience_level: Option<ExperienceLevel>,
    pub primary_role: Option<Role>,
    pub secondary_role: Option<Role>,
    pub primary_languages: Vec<String>,
    pub secondary_languages: Vec<String>,
    pub school: Option<String>,
    pub goal: Option<String>,
    pub pronouns: Option<String>,
    pub note: Option<String>,
    pub personality_trait: Option<String>,
    pub discord_link: Option<String>,
    pub image_link: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Profile> for ProfileDto {
    fn from(p: Profile) -> Self {
        Self {
            id: p.id.to_string(),
            user_id: p.user_id.to_string(),
            display_name: p.display_name,
            experience_level: p.experience_level,
            primary_role: p.primary_role,
            secondary_role: p.secondary_role,
            primary_languages: p.primary_languages,
            secondary_languages: p.secondary_languages,
            school: p.school,
            goal: p.goal,
            pronouns: p.pronouns,
            note: p.note,
            personality_trait: p.personality_trait,
            discord_link: p.discord_link,
            image_link: p.image_link,
            created_at: p.created_at.timestamp(),
            updated_at: p.updated_at.timestamp(),
        }
    }
}
