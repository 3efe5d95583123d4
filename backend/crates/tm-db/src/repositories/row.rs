//! Column decoding shared by the repositories.
//!
//! Ids are stored as hyphenated TEXT, timestamps as Unix seconds and
//! language lists as JSON arrays.

use crate::{DbError, Result as DbErrorResult};

use std::str::FromStr;

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub(crate) fn uuid(value: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::corrupt(format!("bad uuid '{}': {}", value, e)))
}

pub(crate) fn timestamp(value: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(value, 0)
        .ok_or_else(|| DbError::corrupt(format!("timestamp out of range: {}", value)))
}

pub(crate) fn optional_enum<T: FromStr>(value: Option<String>) -> DbErrorResult<Option<T>>
where
    T::Err: std::fmt::Display,
{
    value
        .map(|v| T::from_str(&v).map_err(|e| DbError::corrupt(e.to_string())))
        .transpose()
}

pub(crate) fn languages(value: &str) -> DbErrorResult<Vec<String>> {
    serde_json::from_str(value)
        .map_err(|e| DbError::corrupt(format!("bad language list '{}': {}", value, e)))
}

pub(crate) fn languages_json(languages: &[String]) -> DbErrorResult<String> {
    serde_json::to_string(languages)
        .map_err(|e| DbError::corrupt(format!("cannot encode language list: {}", e)))
}
