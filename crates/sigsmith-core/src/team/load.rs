//! Read a team list file into entries.

use serde_json::Value;
use std::io;
use std::path::{Path, PathBuf};

use super::entry::TeamEntry;
use super::EXAMPLE_TEAM_JSON;

/// Team list problems that abort a batch before any record is processed.
#[derive(Debug, thiserror::Error)]
pub enum TeamListError {
    #[error(
        "team list not found: {}\n\nCreate it with the following structure:\n{example}",
        .path.display(),
        example = EXAMPLE_TEAM_JSON
    )]
    Missing { path: PathBuf },
    #[error("read team list {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(
        "{}: {reason}\n\nExpected structure:\n{example}",
        .path.display(),
        example = EXAMPLE_TEAM_JSON
    )]
    Invalid { path: PathBuf, reason: String },
}

/// Loads the team list at `path`.
///
/// The file must hold a non-empty JSON array. Elements are not decoded here;
/// see [`TeamEntry::decode`].
pub fn load_team(path: &Path) -> Result<Vec<TeamEntry>, TeamListError> {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(TeamListError::Missing {
                path: path.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(TeamListError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    parse_team(path, &bytes)
}

/// Parses team list bytes; `path` is only used in error messages.
pub fn parse_team(path: &Path, bytes: &[u8]) -> Result<Vec<TeamEntry>, TeamListError> {
    let invalid = |reason: String| TeamListError::Invalid {
        path: path.to_path_buf(),
        reason,
    };

    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| invalid(format!("not valid JSON ({e})")))?;
    let items = match value {
        Value::Array(items) => items,
        _ => return Err(invalid("must contain an array of team members".into())),
    };
    if items.is_empty() {
        return Err(invalid("must contain at least one team member".into()));
    }

    tracing::debug!(path = %path.display(), count = items.len(), "loaded team list");
    Ok(items
        .into_iter()
        .enumerate()
        .map(|(i, v)| TeamEntry::new(i, v))
        .collect())
}
