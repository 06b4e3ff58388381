//! Batch generation over a team list.
//!
//! Entries are processed in input order, one at a time. Each entry's failure
//! (bad entry, invalid field, render failure, write failure) is recorded as
//! that entry's outcome and the loop moves on; only an empty input aborts.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::composer::{compose, GenerationResult};
use crate::config::Configuration;
use crate::error::GenerationError;
use crate::storage::SignatureSink;
use crate::team::TeamEntry;

/// Batch-level failure: nothing was processed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BatchError {
    #[error("team list is empty; nothing to generate")]
    EmptyTeamList,
}

/// A signature that was rendered and persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub result: GenerationResult,
    pub path: PathBuf,
}

/// Outcome for one team entry.
#[derive(Debug)]
pub struct RecordOutcome {
    /// Person name, or `#<position>` when the entry has none.
    pub label: String,
    pub result: Result<Generated, GenerationError>,
}

/// Per-entry outcomes, in the same order as the input.
#[derive(Debug, Default)]
pub struct BatchReport {
    outcomes: Vec<RecordOutcome>,
}

impl BatchReport {
    pub fn outcomes(&self) -> &[RecordOutcome] {
        &self.outcomes
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    pub fn successes(&self) -> impl Iterator<Item = (&str, &Generated)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(|g| (o.label.as_str(), g)))
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &GenerationError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.label.as_str(), e)))
    }
}

/// Generates and persists a signature for every entry.
///
/// Returns [`BatchError::EmptyTeamList`] before touching the sink when
/// `entries` is empty. Otherwise always returns a report, even if every entry
/// failed.
pub fn generate_all(
    entries: &[TeamEntry],
    template: &str,
    config: &Configuration,
    sink: &mut dyn SignatureSink,
) -> Result<BatchReport, BatchError> {
    if entries.is_empty() {
        return Err(BatchError::EmptyTeamList);
    }

    let mut report = BatchReport {
        outcomes: Vec::with_capacity(entries.len()),
    };
    let mut claimed: HashMap<String, String> = HashMap::new();

    for entry in entries {
        let result = generate_one(entry, template, config, sink);
        match &result {
            Ok(generated) => {
                let file = &generated.result.output_file_name;
                if let Some(previous) = claimed.insert(file.clone(), entry.label().to_string()) {
                    tracing::warn!(
                        file = %file,
                        previous = %previous,
                        current = %entry.label(),
                        "output file name collision; later signature replaced the earlier one"
                    );
                }
                tracing::info!(
                    name = %entry.label(),
                    path = %generated.path.display(),
                    "generated signature"
                );
            }
            Err(e) => {
                tracing::warn!(name = %entry.label(), error = %e, "skipping record");
            }
        }
        report.outcomes.push(RecordOutcome {
            label: entry.label().to_string(),
            result,
        });
    }

    tracing::info!(
        succeeded = report.succeeded(),
        failed = report.failed(),
        "batch finished"
    );
    Ok(report)
}

fn generate_one(
    entry: &TeamEntry,
    template: &str,
    config: &Configuration,
    sink: &mut dyn SignatureSink,
) -> Result<Generated, GenerationError> {
    let record = entry.decode()?;
    let result = compose(&record, template, config)?;
    let path = sink
        .write(&result)
        .map_err(|source| GenerationError::Write {
            file: result.output_file_name.clone(),
            source,
        })?;
    Ok(Generated { result, path })
}
