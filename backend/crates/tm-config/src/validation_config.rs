use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Validation constraints
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_MIN_PASSWORD_LENGTH: usize = 128;
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

pub const MIN_NAME_LENGTH: usize = 1;
pub const MAX_NAME_LENGTH: usize = 500;
pub const DEFAULT_MAX_NAME_LENGTH: usize = 100;

pub const MIN_TEXT_LENGTH: usize = 1;
pub const MAX_TEXT_LENGTH: usize = 100_000;
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 2000;

pub const MIN_LANGUAGES: usize = 1;
pub const MAX_LANGUAGES: usize = 200;
pub const DEFAULT_MAX_LANGUAGES: usize = 20;

pub const MIN_LANGUAGE_LENGTH: usize = 1;
pub const MAX_LANGUAGE_LENGTH: usize = 200;
pub const DEFAULT_MAX_LANGUAGE_LENGTH: usize = 50;

/// Field limits applied to registration and profile input.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub min_password_length: usize,
    /// First/last name and display name
    pub max_name_length: usize,
    /// Free text: school, goal, pronouns, note, personality trait, message
    pub max_text_length: usize,
    /// Entries per language list
    pub max_languages: usize,
    pub max_language_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
            max_languages: DEFAULT_MAX_LANGUAGES,
            max_language_length: DEFAULT_MAX_LANGUAGE_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::check_range(
            "min_password_length",
            self.min_password_length,
            MIN_PASSWORD_LENGTH,
            MAX_MIN_PASSWORD_LENGTH,
        )?;
        Self::check_range(
            "max_name_length",
            self.max_name_length,
            MIN_NAME_LENGTH,
            MAX_NAME_LENGTH,
        )?;
        Self::check_range(
            "max_text_length",
            self.max_text_length,
            MIN_TEXT_LENGTH,
            MAX_TEXT_LENGTH,
        )?;
        Self::check_range(
            "max_languages",
            self.max_languages,
            MIN_LANGUAGES,
            MAX_LANGUAGES,
        )?;
        Self::check_range(
            "max_language_length",
            self.max_language_length,
            MIN_LANGUAGE_LENGTH,
            MAX_LANGUAGE_LENGTH,
        )
    }

    #[track_caller]
    fn check_range(name: &str, value: usize, min: usize, max: usize) -> ConfigErrorResult<()> {
        if value < min || value > max {
            return Err(ConfigError::config(format!(
                "validation.{} must be {}-{}, got {}",
                name, min, max, value
            )));
        }
        Ok(())
    }
}
