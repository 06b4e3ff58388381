//! CLI command handlers. Each command is in its own file.

mod batch;
mod completions;
mod generate;
mod man;

pub use batch::run_batch;
pub use completions::run_completions;
pub use generate::run_generate;
pub use man::run_man;

use anyhow::{Context, Result};
use std::path::Path;

/// Reads the signature template as UTF-8 text.
fn read_template(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read template {}", path.display()))
}
