//! CLI for the sigsmith signature generator.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use sigsmith_core::config;
use std::path::PathBuf;

use commands::{run_batch, run_completions, run_generate, run_man};

/// Top-level CLI for sigsmith.
#[derive(Debug, Parser)]
#[command(name = "sigsmith", version)]
#[command(about = "sigsmith: HTML email signatures from a template", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Interactively generate a signature for one person.
    Generate {
        /// Signature template (defaults to the config file's `template`).
        #[arg(long, value_name = "PATH")]
        template: Option<PathBuf>,
        /// Directory to write the signature into.
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Generate signatures for every member of a team list.
    Batch {
        /// JSON team list (defaults to the config file's `team_file`).
        #[arg(long, value_name = "PATH")]
        team: Option<PathBuf>,
        /// Signature template (defaults to the config file's `template`).
        #[arg(long, value_name = "PATH")]
        template: Option<PathBuf>,
        /// Directory to write signatures into.
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Print a shell completion script.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Generate {
                template,
                output_dir,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let template = template.unwrap_or_else(|| cfg.template.clone());
                let output_dir = output_dir.unwrap_or_else(|| cfg.output_dir.clone());
                run_generate(&cfg, &template, &output_dir)?;
            }
            CliCommand::Batch {
                team,
                template,
                output_dir,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let team = team.unwrap_or_else(|| cfg.team_file.clone());
                let template = template.unwrap_or_else(|| cfg.template.clone());
                let output_dir = output_dir.unwrap_or_else(|| cfg.output_dir.clone());
                run_batch(&cfg, &team, &template, &output_dir)?;
            }
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
