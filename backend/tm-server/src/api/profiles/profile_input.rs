//! Parsing and validation shared by profile create and update.
//!
//! Blank strings count as "not set": an empty `experience_level` or `goal`
//! clears the field rather than failing.

use crate::ApiResult;

use tm_config::ValidationConfig;
use tm_core::{ExperienceLevel, Profile, Role, validation};

use std::str::FromStr;

pub fn parse_experience_level(value: Option<&str>) -> ApiResult<Option<ExperienceLevel>> {
    match non_blank(value) {
        Some(v) => Ok(Some(ExperienceLevel::from_str(v)?)),
        None => Ok(None),
    }
}

pub fn parse_role(value: Option<&str>) -> ApiResult<Option<Role>> {
    match non_blank(value) {
        Some(v) => Ok(Some(Role::from_str(v)?)),
        None => Ok(None),
    }
}

/// Trimmed text, or None when blank
pub fn clean_text(value: Option<String>) -> Option<String> {
    non_blank(value.as_deref()).map(str::to_string)
}

/// Check every user-supplied field of a profile against the configured limits
pub fn validate_profile(profile: &Profile, limits: &ValidationConfig) -> ApiResult<()> {
    let max_text = limits.max_text_length;

    validation::validate_languages(
        "primary_languages",
        &profile.primary_languages,
        limits.max_languages,
        limits.max_language_length,
    )?;
    validation::validate_languages(
        "secondary_languages",
        &profile.secondary_languages,
        limits.max_languages,
        limits.max_language_length,
    )?;

    for (field, value) in [
        ("school", &profile.school),
        ("goal", &profile.goal),
        ("pronouns", &profile.pronouns),
        ("note", &profile.note),
        ("personality_trait", &profile.personality_trait),
    ] {
        validation::validate_optional_text(field, value.as_deref(), max_text)?;
    }

    validation::validate_link("discord_link", profile.discord_link.as_deref())?;
    validation::validate_link("image_link", profile.image_link.as_deref())?;

    Ok(())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
