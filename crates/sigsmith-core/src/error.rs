//! Per-record generation error.

use std::io;

use crate::record::ValidationError;
use crate::template::RenderError;

/// Why one record produced no signature.
///
/// In batch mode each of these is contained to its record; the interactive
/// driver treats any of them as fatal.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The team list entry is not a well-formed person record.
    #[error("malformed team entry: {0}")]
    InvalidEntry(#[source] serde_json::Error),
    /// The record decoded but a field is invalid.
    #[error("invalid record: {0}")]
    Validation(#[from] ValidationError),
    /// The template could not be fully substituted.
    #[error(transparent)]
    Render(#[from] RenderError),
    /// The rendered signature could not be persisted.
    #[error("write {file}: {source}")]
    Write {
        file: String,
        #[source]
        source: io::Error,
    },
}
