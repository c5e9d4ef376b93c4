//! Audit command - score an account health audit from issue codes

use crate::catalog::IssueCatalog;
use crate::config::load_scoring_config;
use crate::models::Dimension;
use crate::reporters::{self, OutputFormat};
use crate::scoring::AuditCalculator;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::Path;

/// Run the audit command
pub fn run(input: &Path, format: &str, output: Option<&Path>) -> Result<()> {
    let format: OutputFormat = format.parse()?;

    let content = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let codes: BTreeMap<Dimension, Vec<String>> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid audit input in {}", input.display()))?;

    let config = load_scoring_config(Path::new("."));
    let audit_input = IssueCatalog::builtin().audit_input(&codes)?;
    let result = AuditCalculator::new(&config.audit.weights).audit(&audit_input)?;

    let rendered = match format {
        OutputFormat::Text => reporters::text::render_audit(&result),
        OutputFormat::Json => reporters::json::render(&result)?,
    };
    super::emit(&rendered, output)
}
