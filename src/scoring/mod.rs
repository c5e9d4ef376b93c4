//! Account scoring engine
//!
//! Three independent, side-effect-free calculators sharing one design
//! pattern: a weighted base score, penalty deductions from discrete
//! findings, and banded classification of the result.
//!
//! # Scoring Formulas
//!
//! ```text
//! Fatigue  = Σ factor_weight × sub_score               (clamped to [0, 100])
//!   sub_score = saturating linear ramp of one decay signal
//!
//! Audit    = round(Σ dimension_weight × dimension_score)
//!   dimension_score = clamp(100 - Σ issue deductions, 0, 100)
//!
//! Priority = round(severity + min(impact / 100, 50)
//!                  + quick_win + affected_entities × 5)
//! ```
//!
//! All three are pure, synchronous, allocation-light functions with no
//! shared mutable state: same input, same output, safe to call from any
//! number of threads. The only process-wide state is the read-only issue
//! catalog and weight configuration, injected by reference.

pub mod audit;
pub mod fatigue;
pub mod priority;

pub use audit::{compute_audit, AuditCalculator};
pub use fatigue::{compute_fatigue, FATIGUE_ALERT_THRESHOLD, FATIGUE_WARNING_THRESHOLD};
pub use priority::compute_priority;
