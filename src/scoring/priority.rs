//! Recommendation priority scoring
//!
//! Combines severity, estimated dollar impact, fix difficulty, and blast
//! radius into a single sortable integer. Severity dominates, impact is
//! capped so one very-high-dollar issue cannot drown out severity
//! ordering, quick wins get a small bonus, and scope is deliberately
//! uncapped so an issue touching many entities can always out-rank a
//! narrow one. Tie-break policy belongs to the caller (stable sort keeps
//! insertion order).

use crate::error::ScoreError;
use crate::models::RecommendationInput;

/// Dollars of estimated impact per priority point
const IMPACT_DIVISOR: f64 = 100.0;
/// Maximum contribution of the impact factor
const IMPACT_CAP: f64 = 50.0;
/// Priority points per affected entity (uncapped)
const SCOPE_POINTS_PER_ENTITY: f64 = 5.0;

/// Compute a recommendation's priority score. Higher is more urgent.
///
/// ```text
/// priority = round(severity_points
///                  + min(estimated_impact / 100, 50)
///                  + quick_win_points
///                  + affected_entities × 5)
/// ```
///
/// A non-finite or negative `estimated_impact` indicates a caller bug and
/// is rejected rather than clamped.
pub fn compute_priority(rec: &RecommendationInput) -> Result<u32, ScoreError> {
    if !rec.estimated_impact.is_finite() || rec.estimated_impact < 0.0 {
        return Err(ScoreError::InvalidImpact(rec.estimated_impact));
    }

    let severity_score = rec.severity.base_points();
    let impact_score = (rec.estimated_impact / IMPACT_DIVISOR).min(IMPACT_CAP);
    let difficulty_score = rec.difficulty.quick_win_points();
    let scope_score = f64::from(rec.affected_entities) * SCOPE_POINTS_PER_ENTITY;

    Ok((severity_score + impact_score + difficulty_score + scope_score).round() as u32)
}
