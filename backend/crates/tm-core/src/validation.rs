//! Input validation for user-supplied fields.
//!
//! Limits that operators may want to tune (name and text lengths, list
//! sizes) are passed in by the caller; the server takes them from config.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Longest address accepted (RFC 5321 path limit)
pub const MAX_EMAIL_LENGTH: usize = 254;
/// Upper bound on password length, keeps hashing cost bounded
pub const MAX_PASSWORD_LENGTH: usize = 1024;
pub const MAX_LINK_LENGTH: usize = 2048;

#[track_caller]
fn invalid(field: &str, message: String) -> CoreError {
    CoreError::Validation {
        field: field.to_string(),
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}

/// Shape check only: one '@', non-empty local part, dotted domain, no whitespace
#[track_caller]
pub fn validate_email(email: &str) -> CoreErrorResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(invalid("email", "email cannot be empty".to_string()));
    }

    if email.len() > MAX_EMAIL_LENGTH {
        return Err(invalid(
            "email",
            format!("email must not exceed {} characters", MAX_EMAIL_LENGTH),
        ));
    }

    if email.chars().any(char::is_whitespace) {
        return Err(invalid("email", "email cannot contain whitespace".to_string()));
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(invalid("email", "email must contain '@'".to_string()));
    };

    if local.is_empty() || domain.contains('@') {
        return Err(invalid("email", "email is malformed".to_string()));
    }

    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(invalid("email", "email domain is malformed".to_string()));
    }

    Ok(())
}

#[track_caller]
pub fn validate_password(password: &str, min_length: usize) -> CoreErrorResult<()> {
    let length = password.chars().count();

    if length < min_length {
        return Err(invalid(
            "password",
            format!("password must be at least {} characters", min_length),
        ));
    }

    if length > MAX_PASSWORD_LENGTH {
        return Err(invalid(
            "password",
            format!("password must not exceed {} characters", MAX_PASSWORD_LENGTH),
        ));
    }

    Ok(())
}

/// Required, non-blank, bounded
#[track_caller]
pub fn validate_name(field: &str, value: &str, max_length: usize) -> CoreErrorResult<()> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(invalid(field, format!("{} cannot be empty", field)));
    }

    if trimmed.chars().count() > max_length {
        return Err(invalid(
            field,
            format!("{} must not exceed {} characters", field, max_length),
        ));
    }

    Ok(())
}

#[track_caller]
pub fn validate_optional_text(
    field: &str,
    value: Option<&str>,
    max_length: usize,
) -> CoreErrorResult<()> {
    match value {
        Some(v) if v.chars().count() > max_length => Err(invalid(
            field,
            format!("{} must not exceed {} characters", field, max_length),
        )),
        _ => Ok(()),
    }
}

#[track_caller]
pub fn validate_languages(
    field: &str,
    languages: &[String],
    max_items: usize,
    max_length: usize,
) -> CoreErrorResult<()> {
    if languages.len() > max_items {
        return Err(invalid(
            field,
            format!("{} must not contain more than {} entries", field, max_items),
        ));
    }

    if let Some(too_long) = languages
        .iter()
        .find(|l| l.trim().chars().count() > max_length)
    {
        return Err(invalid(
            field,
            format!(
                "'{}' in {} exceeds {} characters",
                too_long, field, max_length
            ),
        ));
    }

    Ok(())
}

/// Links are optional; when present they must be absolute http(s) URLs
#[track_caller]
pub fn validate_link(field: &str, value: Option<&str>) -> CoreErrorResult<()> {
    let Some(link) = value.map(str::trim).filter(|l| !l.is_empty()) else {
        return Ok(());
    };

    if link.len() > MAX_LINK_LENGTH {
        return Err(invalid(
            field,
            format!("{} must not exceed {} characters", field, MAX_LINK_LENGTH),
        ));
    }

    if link.chars().any(char::is_whitespace) {
        return Err(invalid(field, format!("{} cannot contain whitespace", field)));
    }

    let rest = link
        .strip_prefix("https://")
        .or_else(|| link.strip_prefix("http://"));

    match rest {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(invalid(
            field,
            format!("{} must be an http:// or https:// URL", field),
        )),
    }
}
