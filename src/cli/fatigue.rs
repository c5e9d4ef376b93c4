//! Fatigue command - score creative fatigue for a batch of creatives

use crate::models::{CreativeFatigue, FatigueInput, FatigueStatus};
use crate::reporters::{self, OutputFormat};
use crate::scoring::compute_fatigue;
use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Raw per-creative signals as they arrive from upstream exports.
///
/// `days_active` may be given directly or derived from `started_at`; the
/// derivation happens here on the caller side so the engine itself never
/// reads the clock.
#[derive(Debug, Deserialize)]
struct CreativeSignals {
    creative_id: String,
    ctr_change: f64,
    frequency: f64,
    #[serde(default)]
    days_active: Option<f64>,
    #[serde(default)]
    started_at: Option<NaiveDate>,
    conversion_rate_change: f64,
}

impl CreativeSignals {
    fn resolve_days_active(&self, today: NaiveDate) -> Result<f64> {
        if let Some(days) = self.days_active {
            return Ok(days);
        }
        if let Some(start) = self.started_at {
            return Ok((today - start).num_days().max(0) as f64);
        }
        anyhow::bail!(
            "creative '{}' needs either days_active or started_at",
            self.creative_id
        )
    }
}

fn score_batch(signals: Vec<CreativeSignals>, today: NaiveDate) -> Result<Vec<CreativeFatigue>> {
    let mut creatives = Vec::with_capacity(signals.len());
    for signal in signals {
        let fatigue = compute_fatigue(&FatigueInput {
            ctr_change: signal.ctr_change,
            frequency: signal.frequency,
            days_active: signal.resolve_days_active(today)?,
            conversion_rate_change: signal.conversion_rate_change,
        });
        if fatigue.status == FatigueStatus::Fatigued {
            info!("fatigue alert: creative '{}' scored {:.1}", signal.creative_id, fatigue.score);
        }
        creatives.push(CreativeFatigue {
            creative_id: signal.creative_id,
            fatigue,
        });
    }
    Ok(creatives)
}

/// Run the fatigue command
pub fn run(input: &Path, format: &str, output: Option<&Path>, alerts_only: bool) -> Result<()> {
    let format: OutputFormat = format.parse()?;

    let content = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let signals: Vec<CreativeSignals> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid creatives input in {}", input.display()))?;

    let mut creatives = score_batch(signals, Utc::now().date_naive())?;
    if alerts_only {
        creatives.retain(|c| c.fatigue.status == FatigueStatus::Fatigued);
    }

    let rendered = match format {
        OutputFormat::Text => reporters::text::render_fatigue(&creatives),
        OutputFormat::Json => reporters::json::render(&creatives)?,
    };
    super::emit(&rendered, output)
}
