//! Adscore - advertising account scoring CLI
//!
//! Batch front-end for the scoring engine: reads already-fetched account
//! data from JSON files and prints audit, fatigue, and ranking reports.

use adscore::cli;
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // Parse CLI args and run
    let cli = cli::Cli::parse();
    cli::run(cli)
}
