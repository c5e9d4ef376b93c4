//! Core data models for Adscore
//!
//! These models are shared by all three calculators and by the CLI and
//! reporter layers. Every result type is a plain data record with only
//! primitive fields so it can cross a network boundary verbatim as JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Severity levels for audit issues and recommendations
///
/// Declaration order is ordinal: `Low < Medium < High < Critical`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Fixed base-point value used by the audit and priority calculators.
    ///
    /// Ordinal order implies point order; this table is the single place
    /// the mapping is defined.
    pub fn base_points(&self) -> f64 {
        match self {
            Severity::Critical => 100.0,
            Severity::High => 70.0,
            Severity::Medium => 40.0,
            Severity::Low => 20.0,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// How hard a recommendation is to act on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    OneClick,
    Easy,
    Medium,
    Complex,
}

impl Difficulty {
    /// Quick-win bonus: easy fixes rank slightly higher, all else equal.
    pub fn quick_win_points(&self) -> f64 {
        match self {
            Difficulty::OneClick => 30.0,
            Difficulty::Easy => 20.0,
            Difficulty::Medium => 10.0,
            Difficulty::Complex => 0.0,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::OneClick => write!(f, "one_click"),
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Complex => write!(f, "complex"),
        }
    }
}

/// Letter grade assigned to an overall audit score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Calculate grade from score.
    ///
    /// Bands are contiguous and exhaustive over [0, 100]: every score maps
    /// to exactly one grade.
    pub fn from_score(score: f64) -> Grade {
        match score {
            s if s >= 90.0 => Grade::A,
            s if s >= 75.0 => Grade::B,
            s if s >= 60.0 => Grade::C,
            s if s >= 40.0 => Grade::D,
            _ => Grade::F,
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grade::A => write!(f, "A"),
            Grade::B => write!(f, "B"),
            Grade::C => write!(f, "C"),
            Grade::D => write!(f, "D"),
            Grade::F => write!(f, "F"),
        }
    }
}

/// Tri-state fatigue status for one creative
///
/// Banding from score lives next to the alert threshold in
/// [`crate::scoring::fatigue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FatigueStatus {
    Healthy,
    Warning,
    Fatigued,
}

impl std::fmt::Display for FatigueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FatigueStatus::Healthy => write!(f, "healthy"),
            FatigueStatus::Warning => write!(f, "warning"),
            FatigueStatus::Fatigued => write!(f, "fatigued"),
        }
    }
}

/// The five fixed audit dimensions
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Structure,
    Creative,
    Audience,
    Budget,
    Tracking,
}

impl Dimension {
    /// All dimensions, in reporting order. An audit requires every one.
    pub const ALL: [Dimension; 5] = [
        Dimension::Structure,
        Dimension::Creative,
        Dimension::Audience,
        Dimension::Budget,
        Dimension::Tracking,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Structure => "structure",
            Dimension::Creative => "creative",
            Dimension::Audience => "audience",
            Dimension::Budget => "budget",
            Dimension::Tracking => "tracking",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable finding attached to one audit dimension
///
/// Issues are constructed from the static catalog
/// ([`crate::catalog::IssueCatalog::create_issue`]), which fixes the
/// severity and point deduction per code; callers never supply their own
/// penalty weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub code: String,
    pub severity: Severity,
    pub point_deduction: f64,
    /// Human-readable label from the catalog
    pub title: String,
}

/// Input to the audit calculator: issues found per dimension
///
/// All five dimensions must be present; a partial audit must never be
/// reported as if it were complete.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditInput {
    pub dimensions: BTreeMap<Dimension, Vec<Issue>>,
}

/// Score breakdown for a single audit dimension
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionResult {
    pub name: Dimension,
    /// Always 100; deductions are subtracted from here
    pub base_score: f64,
    pub issues: Vec<Issue>,
    /// `clamp(base_score - total deductions, 0, 100)`
    pub score: f64,
}

/// Complete account health audit result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditResult {
    /// Weight-normalized combination of the dimension scores, rounded
    pub overall_score: f64,
    pub dimensions: BTreeMap<Dimension, DimensionResult>,
    pub grade: Grade,
    pub total_issues: usize,
}

/// Raw performance-decay signals for one creative
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FatigueInput {
    /// Percent change in click-through rate (negative = decay)
    pub ctr_change: f64,
    /// Average impressions per user
    pub frequency: f64,
    /// Days the creative has been active
    pub days_active: f64,
    /// Percent change in conversion rate (negative = decay)
    pub conversion_rate_change: f64,
}

/// Fatigue score and status for one creative
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FatigueResult {
    /// 0-100, higher is more fatigued
    pub score: f64,
    pub status: FatigueStatus,
}

/// One optimization recommendation to be ranked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationInput {
    pub severity: Severity,
    /// Estimated dollar impact of acting on the recommendation
    pub estimated_impact: f64,
    pub difficulty: Difficulty,
    /// Number of campaigns/ad sets/ads the recommendation touches
    pub affected_entities: u32,
}

/// A creative annotated with its fatigue result (batch scoring output)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreativeFatigue {
    pub creative_id: String,
    pub fatigue: FatigueResult,
}

/// A recommendation annotated with its priority score (ranking output)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedRecommendation {
    pub id: String,
    pub title: String,
    pub severity: Severity,
    pub estimated_impact: f64,
    pub difficulty: Difficulty,
    pub affected_entities: u32,
    /// Higher is more urgent; sort descending for display
    pub priority_score: u32,
}
