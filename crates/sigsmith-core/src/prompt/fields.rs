//! The six interactive fields, in prompt order.

use crate::record::{validate_email, validate_required, validate_url, ValidationError};

/// Validator signature shared by all fields; the first argument is the field key.
pub type Validator = fn(&'static str, &str) -> Result<(), ValidationError>;

/// One question asked by the interactive driver.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Stable key, matching the team list's JSON key.
    pub key: &'static str,
    pub message: &'static str,
    /// Used when the answer is empty.
    pub default: String,
    pub validate: Validator,
}

impl FieldSpec {
    fn new(key: &'static str, message: &'static str, default: &str, validate: Validator) -> Self {
        Self {
            key,
            message,
            default: default.to_string(),
            validate,
        }
    }

    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        (self.validate)(self.key, value)
    }
}

pub const NAME: &str = "name";
pub const TITLE: &str = "title";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";
pub const PHOTO_FILENAME: &str = "photoFilename";
pub const BASE_URL: &str = "baseUrl";

/// Builds the interview questions. `default_base_url` is offered for the last one.
pub fn interview_fields(default_base_url: &str) -> [FieldSpec; 6] {
    [
        FieldSpec::new(NAME, "Full name", "Joseph Akintolayo", validate_required),
        FieldSpec::new(TITLE, "Job title", "CTO & Co-Founder", validate_required),
        FieldSpec::new(EMAIL, "Email address", "joseph@spendrule.com", validate_email),
        FieldSpec::new(
            PHONE,
            "Phone number (formatted, e.g. +1 (469) 998-2727)",
            "+1 (469) 998-2727",
            validate_required,
        ),
        FieldSpec::new(
            PHOTO_FILENAME,
            "Profile photo filename (in the assets folder)",
            "profile-joseph.jpg",
            validate_required,
        ),
        FieldSpec::new(
            BASE_URL,
            "Base URL for assets (GitHub Pages or CDN)",
            default_base_url,
            validate_url,
        ),
    ]
}
