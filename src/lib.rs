//! Adscore - advertising account scoring engine
//!
//! Three pure calculators over already-fetched account data:
//! creative fatigue scoring, account health audits, and recommendation
//! priority ranking. The engine fetches nothing, persists nothing, and
//! never reads the wall clock; callers hand it typed input and serialize
//! the typed result.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod reporters;
pub mod scoring;

pub use catalog::IssueCatalog;
pub use error::ScoreError;
pub use scoring::{
    compute_audit, compute_fatigue, compute_priority, AuditCalculator, FATIGUE_ALERT_THRESHOLD,
};
