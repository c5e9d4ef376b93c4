//! Rank command - sort recommendations by priority score

use crate::models::{Difficulty, RankedRecommendation, RecommendationInput, Severity};
use crate::reporters::{self, OutputFormat};
use crate::scoring::compute_priority;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// One recommendation as it arrives from upstream, before scoring
#[derive(Debug, Deserialize)]
struct RecommendationRecord {
    id: String,
    title: String,
    severity: Severity,
    estimated_impact: f64,
    difficulty: Difficulty,
    affected_entities: u32,
}

/// Score and sort descending. The sort is stable, so recommendations with
/// equal scores keep their input order.
fn rank_all(records: Vec<RecommendationRecord>) -> Result<Vec<RankedRecommendation>> {
    let mut ranked = Vec::with_capacity(records.len());
    for record in records {
        let priority_score = compute_priority(&RecommendationInput {
            severity: record.severity,
            estimated_impact: record.estimated_impact,
            difficulty: record.difficulty,
            affected_entities: record.affected_entities,
        })?;
        ranked.push(RankedRecommendation {
            id: record.id,
            title: record.title,
            severity: record.severity,
            estimated_impact: record.estimated_impact,
            difficulty: record.difficulty,
            affected_entities: record.affected_entities,
            priority_score,
        });
    }
    ranked.sort_by(|a, b| b.priority_score.cmp(&a.priority_score));
    Ok(ranked)
}

/// Run the rank command
pub fn run(input: &Path, format: &str, output: Option<&Path>, top: Option<usize>) -> Result<()> {
    let format: OutputFormat = format.parse()?;

    let content = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let records: Vec<RecommendationRecord> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid recommendations input in {}", input.display()))?;

    let mut ranked = rank_all(records)?;
    if let Some(top) = top {
        ranked.truncate(top);
    }

    let rendered = match format {
        OutputFormat::Text => reporters::text::render_rankings(&ranked),
        OutputFormat::Json => reporters::json::render(&ranked)?,
    };
    super::emit(&rendered, output)
}
