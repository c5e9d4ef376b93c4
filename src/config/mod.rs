//! Configuration module for Adscore
//!
//! This module handles:
//! - Process-level configuration (adscore.toml)
//! - Audit dimension weight overrides

mod scoring_config;

pub use scoring_config::{
    load_scoring_config, AuditConfig, AuditWeights, ScoringConfig, CONFIG_FILE_NAME,
};
