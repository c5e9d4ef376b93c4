//! Creative fatigue scoring
//!
//! Maps four performance-decay signals for one ad creative to a 0-100
//! fatigue score and a tri-state status. This is a total function: numeric
//! inputs are sanitized to their documented domains before use, so noisy
//! upstream metrics degrade gracefully instead of producing `NaN`.
//!
//! # Curve
//!
//! Each factor maps to a 0-100 sub-score through a linear saturating ramp:
//!
//! ```text
//! ctr decay:        ramp(-ctr_change, 0 → 25 pts drop)        weight 0.35
//! conversion decay: ramp(-conversion_rate_change, 0 → 25)     weight 0.30
//! frequency:        ramp(frequency, 0 → 4.5 imp/user)         weight 0.20
//! age:              ramp(days_active, 0 → 45 days)            weight 0.15
//! ```
//!
//! A positive or zero change contributes nothing to the decay factors;
//! beyond each saturation point the sub-score holds at 100.

use crate::models::{FatigueInput, FatigueResult, FatigueStatus};
use tracing::debug;

/// Factor weights (sum to 1.0); the decay signals dominate
const CTR_DECAY_WEIGHT: f64 = 0.35;
const CONVERSION_DECAY_WEIGHT: f64 = 0.30;
const FREQUENCY_WEIGHT: f64 = 0.20;
const AGE_WEIGHT: f64 = 0.15;

/// A CTR or conversion-rate drop of this many points saturates its sub-score
const DECAY_SATURATION_PCT: f64 = 25.0;
/// Average impressions per user at which the frequency sub-score saturates
const FREQUENCY_SATURATION: f64 = 4.5;
/// Days active at which the age sub-score saturates
const AGE_SATURATION_DAYS: f64 = 45.0;

/// Score at or above which a creative is `fatigued`.
///
/// Shared contract with the notification surface: a fatigue alert fires
/// exactly when a creative's status flips to `fatigued`, so both sites read
/// this one constant.
pub const FATIGUE_ALERT_THRESHOLD: f64 = 70.0;

/// Score at or above which a creative is in the `warning` band
pub const FATIGUE_WARNING_THRESHOLD: f64 = 40.0;

impl FatigueStatus {
    /// Band a fatigue score: `< 40` healthy, `< 70` warning, else fatigued.
    pub fn from_score(score: f64) -> FatigueStatus {
        if score >= FATIGUE_ALERT_THRESHOLD {
            FatigueStatus::Fatigued
        } else if score >= FATIGUE_WARNING_THRESHOLD {
            FatigueStatus::Warning
        } else {
            FatigueStatus::Healthy
        }
    }
}

/// Clamp a raw signal to its documented domain.
///
/// `±∞` clamps to the domain edges; `NaN` maps to `fallback`, the
/// no-signal boundary for that input.
fn sanitize(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}

/// Linear ramp from 0 at `value <= 0` to 100 at `value >= saturation`.
fn ramp(value: f64, saturation: f64) -> f64 {
    (value / saturation).clamp(0.0, 1.0) * 100.0
}

/// Compute the fatigue score and status for one creative.
///
/// Never fails: out-of-domain input is sanitized, and the result is always
/// in [0, 100] with a status matching the documented bands.
pub fn compute_fatigue(input: &FatigueInput) -> FatigueResult {
    let ctr_change = sanitize(input.ctr_change, -100.0, 100.0, 0.0);
    let conversion_change = sanitize(input.conversion_rate_change, -100.0, 100.0, 0.0);
    let frequency = sanitize(input.frequency, 0.0, f64::MAX, 0.0);
    let days_active = sanitize(input.days_active, 0.0, f64::MAX, 0.0);

    // Only a drop signals decay; -ctr_change is the size of the drop
    let ctr_decay = ramp(-ctr_change, DECAY_SATURATION_PCT);
    let conversion_decay = ramp(-conversion_change, DECAY_SATURATION_PCT);
    let frequency_factor = ramp(frequency, FREQUENCY_SATURATION);
    let age_factor = ramp(days_active, AGE_SATURATION_DAYS);

    let score = (ctr_decay * CTR_DECAY_WEIGHT
        + conversion_decay * CONVERSION_DECAY_WEIGHT
        + frequency_factor * FREQUENCY_WEIGHT
        + age_factor * AGE_WEIGHT)
        .clamp(0.0, 100.0);

    debug!(
        "Fatigue sub-scores: ctr={:.1}, conversion={:.1}, frequency={:.1}, age={:.1} -> {:.1}",
        ctr_decay, conversion_decay, frequency_factor, age_factor, score
    );

    FatigueResult {
        score,
        status: FatigueStatus::from_score(score),
    }
}
