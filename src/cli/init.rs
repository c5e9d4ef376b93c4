//! Init command - write a default adscore.toml

use crate::config::CONFIG_FILE_NAME;
use anyhow::{Context, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# Adscore Configuration
#
# Weights combining the five audit dimension scores into the overall
# score. They must sum to 1.0; off-sum weights are renormalized at load.
# Weights are read once at startup so scores stay comparable across runs.

[audit.weights]
structure = 0.25
creative = 0.20
audience = 0.20
budget = 0.20
tracking = 0.15
"#;

/// Run the init command
pub fn run() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        println!("{} already exists, leaving it untouched", CONFIG_FILE_NAME);
        return Ok(());
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to create {}", CONFIG_FILE_NAME))?;
    println!("Created {}", CONFIG_FILE_NAME);
    println!("\nNext steps:");
    println!("  adscore audit findings.json          Score an account audit");
    println!("  adscore fatigue creatives.json       Score creative fatigue");
    println!("  adscore rank recommendations.json    Rank recommendations");

    Ok(())
}
