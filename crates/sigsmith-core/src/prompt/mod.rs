//! Interactive collection of a single person record.
//!
//! The composer never sees unvalidated input: [`Prompter`] implementations
//! only return values that passed the field's validator.

mod fields;
mod line;

use std::io;

pub use fields::{interview_fields, FieldSpec, Validator};
pub use line::LinePrompter;

use crate::config::{ConfigError, Configuration};
use crate::record::PersonRecord;

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("input closed while asking for {field}")]
    Closed { field: &'static str },
    #[error("prompt I/O: {0}")]
    Io(#[from] io::Error),
    /// A [`Prompter`] that skips validation can still hand back a bad base URL.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Source of validated answers.
pub trait Prompter {
    fn prompt(&mut self, field: &FieldSpec) -> Result<String, PromptError>;
}

/// Answers gathered by [`interview`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interview {
    pub record: PersonRecord,
    pub config: Configuration,
}

/// Asks the six questions in order and assembles the record and configuration.
pub fn interview(
    prompter: &mut dyn Prompter,
    default_base_url: &str,
) -> Result<Interview, PromptError> {
    let [name, title, email, phone, photo, base_url] = interview_fields(default_base_url);

    let record = PersonRecord {
        name: prompter.prompt(&name)?,
        title: prompter.prompt(&title)?,
        email: prompter.prompt(&email)?,
        phone: prompter.prompt(&phone)?,
        photo_filename: prompter.prompt(&photo)?,
    };
    let config = Configuration::new(prompter.prompt(&base_url)?)?;

    Ok(Interview { record, config })
}
