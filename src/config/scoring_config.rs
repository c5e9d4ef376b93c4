//! Process-level configuration support
//!
//! Loads configuration from an `adscore.toml` file in the working
//! directory. Weights are static per process run so that scores stay
//! comparable across audits and over time; a restart picks up catalog or
//! weight changes, and nothing is hot-reloaded.
//!
//! # Configuration Format
//!
//! ```toml
//! # adscore.toml
//!
//! [audit.weights]
//! structure = 0.25
//! creative = 0.20
//! audience = 0.20
//! budget = 0.20
//! tracking = 0.15
//! ```

use crate::models::Dimension;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// Config file name searched in the working directory
pub const CONFIG_FILE_NAME: &str = "adscore.toml";

/// Process-level configuration loaded from adscore.toml
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ScoringConfig {
    /// Audit scoring configuration
    #[serde(default)]
    pub audit: AuditConfig,
}

/// Audit scoring configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AuditConfig {
    /// Weights for the five audit dimensions (must sum to 1.0)
    #[serde(default)]
    pub weights: AuditWeights,
}

/// Weights combining the five dimension scores into the overall score
#[derive(Debug, Clone, Deserialize)]
pub struct AuditWeights {
    /// Weight for the structure dimension (default: 0.25)
    #[serde(default = "default_structure_weight")]
    pub structure: f64,

    /// Weight for the creative dimension (default: 0.20)
    #[serde(default = "default_creative_weight")]
    pub creative: f64,

    /// Weight for the audience dimension (default: 0.20)
    #[serde(default = "default_audience_weight")]
    pub audience: f64,

    /// Weight for the budget dimension (default: 0.20)
    #[serde(default = "default_budget_weight")]
    pub budget: f64,

    /// Weight for the tracking dimension (default: 0.15)
    #[serde(default = "default_tracking_weight")]
    pub tracking: f64,
}

impl Default for AuditWeights {
    fn default() -> Self {
        Self {
            structure: default_structure_weight(),
            creative: default_creative_weight(),
            audience: default_audience_weight(),
            budget: default_budget_weight(),
            tracking: default_tracking_weight(),
        }
    }
}

fn default_structure_weight() -> f64 {
    0.25
}
fn default_creative_weight() -> f64 {
    0.20
}
fn default_audience_weight() -> f64 {
    0.20
}
fn default_budget_weight() -> f64 {
    0.20
}
fn default_tracking_weight() -> f64 {
    0.15
}

impl AuditWeights {
    /// Weight for one dimension.
    pub fn weight(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Structure => self.structure,
            Dimension::Creative => self.creative,
            Dimension::Audience => self.audience,
            Dimension::Budget => self.budget,
            Dimension::Tracking => self.tracking,
        }
    }

    /// Validate that weights sum to 1.0 (with tolerance)
    pub fn is_valid(&self) -> bool {
        let sum: f64 = Dimension::ALL.iter().map(|d| self.weight(*d)).sum();
        (sum - 1.0).abs() < 0.001
    }

    /// Normalize weights to sum to 1.0
    pub fn normalize(&mut self) {
        let sum: f64 = Dimension::ALL.iter().map(|d| self.weight(*d)).sum();
        if sum > 0.0 {
            self.structure /= sum;
            self.creative /= sum;
            self.audience /= sum;
            self.budget /= sum;
            self.tracking /= sum;
        }
    }
}

/// Load scoring configuration from `adscore.toml` in the given directory.
///
/// Returns default configuration if no config file is found. A file that
/// fails to parse is logged and ignored rather than aborting the run.
/// Off-sum weight overrides are renormalized with a warning.
pub fn load_scoring_config(dir: &Path) -> ScoringConfig {
    let path = dir.join(CONFIG_FILE_NAME);
    let mut config = match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str::<ScoringConfig>(&content) {
            Ok(config) => {
                debug!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Failed to parse {}: {} (using defaults)", path.display(), e);
                ScoringConfig::default()
            }
        },
        Err(_) => ScoringConfig::default(),
    };

    if !config.audit.weights.is_valid() {
        warn!("Audit weights do not sum to 1.0; normalizing");
        config.audit.weights.normalize();
    }

    config
}
