//! Person records and field validation.
//!
//! The same validators back the interactive prompt (re-prompt on failure) and
//! the batch path (the record is skipped and reported).

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// One person's signature input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    pub name: String,
    pub title: String,
    pub email: String,
    /// Human-formatted phone number, e.g. `+1 (469) 998-2727`.
    pub phone: String,
    /// File name of the profile photo under the asset base URL.
    pub photo_filename: String,
}

/// A field value that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl PersonRecord {
    /// Checks every field, returning the first failure in field order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_required("name", &self.name)?;
        validate_required("title", &self.title)?;
        validate_email("email", &self.email)?;
        validate_required("phone", &self.phone)?;
        validate_required("photoFilename", &self.photo_filename)?;
        Ok(())
    }
}

/// Rejects values that are empty after trimming.
pub fn validate_required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "a value is required"));
    }
    Ok(())
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

/// Accepts `local@domain.tld`-shaped addresses.
pub fn validate_email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if !email_regex().is_match(value) {
        return Err(ValidationError::new(
            field,
            "please enter a valid email address",
        ));
    }
    Ok(())
}

/// Accepts anything that parses as an absolute URL.
pub fn validate_url(field: &'static str, value: &str) -> Result<(), ValidationError> {
    url::Url::parse(value)
        .map(|_| ())
        .map_err(|e| ValidationError::new(field, format!("please enter a valid URL ({e})")))
}
