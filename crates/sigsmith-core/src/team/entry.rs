//! One element of the team list, decoded lazily.

use serde_json::Value;

use crate::error::GenerationError;
use crate::record::PersonRecord;

/// Raw team list element plus a label to report it under.
///
/// Decoding is deferred so a malformed element fails only its own record.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamEntry {
    label: String,
    value: Value,
}

impl TeamEntry {
    /// Wraps the element at zero-based `index`. The label is the element's
    /// `name` when it is a non-blank string, otherwise `#<position>`.
    pub fn new(index: usize, value: Value) -> Self {
        let label = value
            .get("name")
            .and_then(Value::as_str)
            .filter(|n| !n.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{}", index + 1));
        Self { label, value }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Decodes and validates the person record.
    pub fn decode(&self) -> Result<PersonRecord, GenerationError> {
        let record: PersonRecord =
            serde_json::from_value(self.value.clone()).map_err(GenerationError::InvalidEntry)?;
        record.validate()?;
        Ok(record)
    }
}

impl From<PersonRecord> for TeamEntry {
    fn from(record: PersonRecord) -> Self {
        let label = record.name.clone();
        // Serializing a struct of strings cannot fail.
        let value = serde_json::to_value(&record).unwrap_or(Value::Null);
        Self { label, value }
    }
}
