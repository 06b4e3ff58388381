//! Persisting rendered signatures.
//!
//! The batch loop and the interactive driver only see the [`SignatureSink`]
//! trait. [`DirectorySink`] writes each signature to a `.part` temp file and
//! renames it into place, so a failed write never leaves a truncated signature
//! under its final name.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::composer::GenerationResult;

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Destination for rendered signatures.
pub trait SignatureSink {
    /// Persists one result and returns where it went.
    fn write(&mut self, result: &GenerationResult) -> io::Result<PathBuf>;
}

/// Writes signatures as files into a single output directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Uses `dir` as the output directory, creating it (and parents) if missing.
    pub fn create(dir: &Path) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SignatureSink for DirectorySink {
    fn write(&mut self, result: &GenerationResult) -> io::Result<PathBuf> {
        let final_path = self.dir.join(&result.output_file_name);
        let tmp = temp_path(&final_path);

        let written = fs::File::create(&tmp)
            .and_then(|mut f| {
                f.write_all(result.output_content.as_bytes())?;
                f.sync_all()
            })
            .and_then(|()| fs::rename(&tmp, &final_path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }

        tracing::debug!(path = %final_path.display(), "wrote signature");
        Ok(final_path)
    }
}

/// Path for the temp file: appends `.part` to the final path (e.g. `a.html` → `a.html.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}
