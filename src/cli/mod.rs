//! CLI command definitions and handlers

mod audit;
mod fatigue;
mod init;
mod rank;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Adscore - advertising account scoring
///
/// Scores already-fetched account data from JSON files; nothing here
/// talks to an ad platform.
#[derive(Parser, Debug)]
#[command(name = "adscore")]
#[command(
    version,
    about = "Score ad account health, creative fatigue, and recommendation priority",
    after_help = "\
Examples:
  adscore audit findings.json              Score an account health audit
  adscore audit findings.json -f json      JSON output for scripting
  adscore fatigue creatives.json           Score a batch of creatives
  adscore fatigue creatives.json --alerts-only   Only fatigued creatives
  adscore rank recommendations.json --top 10     Ten most urgent actions
  adscore init                             Write a default adscore.toml"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize an adscore.toml config file with the default weights
    Init,

    /// Score an account health audit from per-dimension issue codes
    ///
    /// The input file maps each of the five dimensions (structure,
    /// creative, audience, budget, tracking) to a list of issue codes
    /// from the catalog.
    Audit {
        /// Path to the audit input JSON
        input: PathBuf,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Score creative fatigue for a batch of creatives
    Fatigue {
        /// Path to the creatives input JSON
        input: PathBuf,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Only show creatives whose status is fatigued
        #[arg(long)]
        alerts_only: bool,
    },

    /// Rank recommendations by priority (most urgent first)
    Rank {
        /// Path to the recommendations input JSON
        input: PathBuf,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Show only the N most urgent recommendations
        #[arg(long)]
        top: Option<usize>,
    },
}

/// Dispatch a parsed CLI invocation
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init => init::run(),
        Commands::Audit {
            input,
            format,
            output,
        } => audit::run(&input, &format, output.as_deref()),
        Commands::Fatigue {
            input,
            format,
            output,
            alerts_only,
        } => fatigue::run(&input, &format, output.as_deref(), alerts_only),
        Commands::Rank {
            input,
            format,
            output,
            top,
        } => rank::run(&input, &format, output.as_deref(), top),
    }
}

/// Write rendered output to a file or stdout
fn emit(rendered: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
