//! `sigsmith generate` – interactive single-person signature.

use anyhow::{Context, Result};
use sigsmith_core::composer::{compose, GenerationResult};
use sigsmith_core::config::{Configuration, SigsmithConfig, LOGO_FILENAME};
use sigsmith_core::naming::build_asset_url;
use sigsmith_core::prompt::{interview, LinePrompter, Prompter};
use sigsmith_core::storage::{DirectorySink, SignatureSink};
use std::io;
use std::path::{Path, PathBuf};

use super::read_template;

pub fn run_generate(cfg: &SigsmithConfig, template: &Path, output_dir: &Path) -> Result<()> {
    let defaults = Configuration::from_env(cfg)?;
    let template_text = read_template(template)?;

    println!("sigsmith: interactive email signature generator");
    println!("Press Enter to accept the value in parentheses.\n");

    let stdin = io::stdin();
    let mut prompter = LinePrompter::new(stdin.lock(), io::stdout());
    let mut sink = DirectorySink::create(output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;

    let generated = generate_with(&mut prompter, &template_text, &defaults, &mut sink)?;

    println!("\nSignature generated for {}.", generated.result.person_name);
    println!("Output file: {}", generated.path.display());
    println!("Profile photo URL: {}", generated.photo_url);
    println!("Logo URL: {}", generated.logo_url);
    Ok(())
}

/// What the interactive run produced.
#[derive(Debug)]
pub(crate) struct InteractiveOutput {
    pub result: GenerationResult,
    pub path: PathBuf,
    pub photo_url: String,
    pub logo_url: String,
}

/// Interviews, composes and writes one signature.
pub(crate) fn generate_with(
    prompter: &mut dyn Prompter,
    template: &str,
    defaults: &Configuration,
    sink: &mut dyn SignatureSink,
) -> Result<InteractiveOutput> {
    let answers = interview(prompter, defaults.base_url())?;
    let result = compose(&answers.record, template, &answers.config)?;
    let path = sink
        .write(&result)
        .with_context(|| format!("write {}", result.output_file_name))?;
    tracing::info!(name = %result.person_name, path = %path.display(), "generated signature");

    let base_url = answers.config.base_url();
    Ok(InteractiveOutput {
        photo_url: build_asset_url(base_url, &answers.record.photo_filename),
        logo_url: build_asset_url(base_url, LOGO_FILENAME),
        result,
        path,
    })
}
