//! `sigsmith batch` – signatures for every member of a team list.

use anyhow::{Context, Result};
use sigsmith_core::batch::{self, BatchReport};
use sigsmith_core::config::{Configuration, SigsmithConfig};
use sigsmith_core::storage::DirectorySink;
use sigsmith_core::team;
use std::io::{self, Write};
use std::path::Path;

use super::read_template;

pub fn run_batch(
    cfg: &SigsmithConfig,
    team_path: &Path,
    template: &Path,
    output_dir: &Path,
) -> Result<()> {
    let entries = team::load_team(team_path)?;
    let template_text = read_template(template)?;
    let config = Configuration::from_env(cfg)?;
    let mut sink = DirectorySink::create(output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;

    println!("Base URL: {}", config.base_url());
    println!("Processing {} team member(s)...\n", entries.len());

    let report = batch::generate_all(&entries, &template_text, &config, &mut sink)?;

    let stdout = io::stdout();
    write_report(&report, output_dir, &mut stdout.lock())?;
    Ok(())
}

/// One line per record in input order, then a summary line.
pub(crate) fn write_report(
    report: &BatchReport,
    output_dir: &Path,
    out: &mut dyn Write,
) -> io::Result<()> {
    for outcome in report.outcomes() {
        match &outcome.result {
            Ok(generated) => writeln!(
                out,
                "ok  {} -> {}",
                outcome.label, generated.result.output_file_name
            )?,
            Err(e) => writeln!(out, "err {}: {}", outcome.label, e)?,
        }
    }
    writeln!(
        out,
        "\nGenerated {} of {} signature(s) in {}",
        report.succeeded(),
        report.total(),
        output_dir.display()
    )
}
