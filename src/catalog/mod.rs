//! Static issue catalogs for the account health audit
//!
//! The catalogs are the engine's public vocabulary: any new issue type must
//! be added here with an explicit severity and point deduction before it
//! can be referenced. Deductions are fixed per issue code, never supplied
//! by callers.
//!
//! The tables are process-wide, read-only configuration: built once into an
//! [`IssueCatalog`] on first use and injected by reference, so the audit
//! calculator stays a pure function of its arguments plus this one table.

use crate::error::ScoreError;
use crate::models::{AuditInput, Dimension, Issue, Severity};
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

/// One catalog entry: a known issue type with its fixed weight
#[derive(Debug, Clone, Copy)]
pub struct IssueSpec {
    pub code: &'static str,
    pub dimension: Dimension,
    pub severity: Severity,
    pub point_deduction: f64,
    pub title: &'static str,
}

const fn spec(
    code: &'static str,
    dimension: Dimension,
    severity: Severity,
    point_deduction: f64,
    title: &'static str,
) -> IssueSpec {
    IssueSpec {
        code,
        dimension,
        severity,
        point_deduction,
        title,
    }
}

/// Campaign/ad-set structure issues
pub const STRUCTURE_ISSUES: &[IssueSpec] = &[
    spec(
        "no_active_campaigns",
        Dimension::Structure,
        Severity::Critical,
        30.0,
        "No active campaigns in the account",
    ),
    spec(
        "overlapping_campaigns",
        Dimension::Structure,
        Severity::High,
        18.0,
        "Campaigns competing for the same audience",
    ),
    spec(
        "paused_majority",
        Dimension::Structure,
        Severity::High,
        18.0,
        "Most campaigns are paused",
    ),
    spec(
        "no_campaign_objectives",
        Dimension::Structure,
        Severity::High,
        15.0,
        "Campaigns without a clear objective",
    ),
    spec(
        "single_ad_set_campaigns",
        Dimension::Structure,
        Severity::Medium,
        12.0,
        "Campaigns with a single ad set",
    ),
    spec(
        "too_many_ad_sets",
        Dimension::Structure,
        Severity::Medium,
        10.0,
        "Ad sets spread too thin for learning",
    ),
    spec(
        "inconsistent_naming",
        Dimension::Structure,
        Severity::Low,
        5.0,
        "No consistent naming convention",
    ),
];

/// Creative quality and rotation issues
pub const CREATIVE_ISSUES: &[IssueSpec] = &[
    spec(
        "disapproved_creatives",
        Dimension::Creative,
        Severity::Critical,
        30.0,
        "Disapproved creatives still assigned",
    ),
    spec(
        "fatigued_creatives",
        Dimension::Creative,
        Severity::High,
        20.0,
        "Creatives past the fatigue threshold",
    ),
    spec(
        "stale_creatives",
        Dimension::Creative,
        Severity::Medium,
        12.0,
        "Creatives running longer than 60 days",
    ),
    spec(
        "low_creative_variety",
        Dimension::Creative,
        Severity::Medium,
        10.0,
        "Fewer than 3 active creatives per ad set",
    ),
    spec(
        "no_video_assets",
        Dimension::Creative,
        Severity::Low,
        6.0,
        "No video creatives in rotation",
    ),
    spec(
        "missing_ad_copy_variants",
        Dimension::Creative,
        Severity::Low,
        5.0,
        "Single copy variant per creative",
    ),
];

/// Audience targeting issues
pub const AUDIENCE_ISSUES: &[IssueSpec] = &[
    spec(
        "audience_overlap",
        Dimension::Audience,
        Severity::High,
        18.0,
        "Ad sets bidding against each other",
    ),
    spec(
        "broad_targeting",
        Dimension::Audience,
        Severity::Medium,
        12.0,
        "Targeting too broad to optimize",
    ),
    spec(
        "narrow_audience",
        Dimension::Audience,
        Severity::Medium,
        10.0,
        "Audience too small for stable delivery",
    ),
    spec(
        "no_exclusions",
        Dimension::Audience,
        Severity::Low,
        6.0,
        "Purchasers not excluded from prospecting",
    ),
    spec(
        "no_lookalikes",
        Dimension::Audience,
        Severity::Low,
        4.0,
        "No lookalike audiences in use",
    ),
];

/// Budget and bidding issues
pub const BUDGET_ISSUES: &[IssueSpec] = &[
    spec(
        "overspend_low_roas",
        Dimension::Budget,
        Severity::Critical,
        30.0,
        "High spend concentrated on low-ROAS campaigns",
    ),
    spec(
        "budget_concentration",
        Dimension::Budget,
        Severity::High,
        18.0,
        "Most spend concentrated in one campaign",
    ),
    spec(
        "underspending",
        Dimension::Budget,
        Severity::Medium,
        10.0,
        "Daily budgets consistently underspent",
    ),
    spec(
        "no_bid_strategy",
        Dimension::Budget,
        Severity::Medium,
        10.0,
        "Default bidding on every campaign",
    ),
    spec(
        "budget_too_low",
        Dimension::Budget,
        Severity::Low,
        5.0,
        "Budgets below the learning-phase minimum",
    ),
];

/// Conversion tracking issues
pub const TRACKING_ISSUES: &[IssueSpec] = &[
    spec(
        "missing_pixel",
        Dimension::Tracking,
        Severity::Critical,
        30.0,
        "No pixel events received",
    ),
    spec(
        "no_conversion_events",
        Dimension::Tracking,
        Severity::High,
        20.0,
        "Conversion events not configured",
    ),
    spec(
        "duplicate_events",
        Dimension::Tracking,
        Severity::Medium,
        12.0,
        "Events firing more than once",
    ),
    spec(
        "stale_catalog_feed",
        Dimension::Tracking,
        Severity::Medium,
        10.0,
        "Product feed not refreshed",
    ),
    spec(
        "no_utm_tags",
        Dimension::Tracking,
        Severity::Low,
        5.0,
        "Destination URLs missing UTM tags",
    ),
];

/// All catalog tables, one per dimension
const ALL_TABLES: [&[IssueSpec]; 5] = [
    STRUCTURE_ISSUES,
    CREATIVE_ISSUES,
    AUDIENCE_ISSUES,
    BUDGET_ISSUES,
    TRACKING_ISSUES,
];

/// Code-indexed view over the static issue tables
pub struct IssueCatalog {
    by_code: HashMap<&'static str, &'static IssueSpec>,
}

impl IssueCatalog {
    fn from_tables(tables: &[&'static [IssueSpec]]) -> Self {
        let mut by_code = HashMap::new();
        for table in tables {
            for entry in *table {
                by_code.insert(entry.code, entry);
            }
        }
        Self { by_code }
    }

    /// The built-in catalog, constructed once per process.
    pub fn builtin() -> &'static IssueCatalog {
        static CATALOG: OnceLock<IssueCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| IssueCatalog::from_tables(&ALL_TABLES))
    }

    /// Look up a catalog entry by code.
    pub fn get(&self, code: &str) -> Option<&'static IssueSpec> {
        self.by_code.get(code).copied()
    }

    /// Construct an [`Issue`] from a catalog code.
    ///
    /// This is the only way issues come into existence: the severity and
    /// point deduction are copied from the catalog entry, so callers cannot
    /// invent arbitrary penalties. Unknown codes fail rather than silently
    /// contributing a zero deduction.
    pub fn create_issue(&self, code: &str) -> Result<Issue, ScoreError> {
        let entry = self
            .get(code)
            .ok_or_else(|| ScoreError::UnknownIssueCode(code.to_string()))?;
        Ok(Issue {
            code: entry.code.to_string(),
            severity: entry.severity,
            point_deduction: entry.point_deduction,
            title: entry.title.to_string(),
        })
    }

    /// Build an [`AuditInput`] from per-dimension code lists.
    ///
    /// Fails on the first unknown code. Dimension completeness is checked
    /// by the audit calculator itself, not here.
    pub fn audit_input(
        &self,
        codes: &BTreeMap<Dimension, Vec<String>>,
    ) -> Result<AuditInput, ScoreError> {
        let mut dimensions = BTreeMap::new();
        for (dimension, dim_codes) in codes {
            let issues = dim_codes
                .iter()
                .map(|code| self.create_issue(code))
                .collect::<Result<Vec<_>, _>>()?;
            dimensions.insert(*dimension, issues);
        }
        Ok(AuditInput { dimensions })
    }

    /// Number of known issue codes.
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }

    /// Iterate all catalog entries.
    pub fn specs(&self) -> impl Iterator<Item = &'static IssueSpec> + '_ {
        self.by_code.values().copied()
    }
}
