//! Account health audit scoring
//!
//! Aggregates per-dimension issue lists into per-dimension scores, a
//! weighted overall score, and a letter grade. Deductions are additive and
//! a dimension bottoms out at 0; it never "owes" points to another
//! dimension. Dimension weights are injected, not tunable at call time.

use crate::config::AuditWeights;
use crate::error::ScoreError;
use crate::models::{AuditInput, AuditResult, Dimension, DimensionResult, Grade};
use std::collections::BTreeMap;
use tracing::info;

/// Every dimension starts from this score before deductions
const BASE_SCORE: f64 = 100.0;

/// Audit calculator over an injected weight table
///
/// Borrowing the weights keeps the calculator a pure function of its
/// explicit arguments plus this one table, and unit-testable with
/// alternate tables.
pub struct AuditCalculator<'a> {
    weights: &'a AuditWeights,
}

impl<'a> AuditCalculator<'a> {
    pub fn new(weights: &'a AuditWeights) -> Self {
        Self { weights }
    }

    /// Run a complete account health audit.
    ///
    /// All five dimensions must be present in the input; a missing key is a
    /// caller error, never silently defaulted.
    pub fn audit(&self, input: &AuditInput) -> Result<AuditResult, ScoreError> {
        for dimension in Dimension::ALL {
            if !input.dimensions.contains_key(&dimension) {
                return Err(ScoreError::MissingDimension(dimension));
            }
        }

        let mut dimensions = BTreeMap::new();
        let mut total_issues = 0;
        for dimension in Dimension::ALL {
            let issues = input.dimensions[&dimension].clone();
            let deduction: f64 = issues.iter().map(|i| i.point_deduction).sum();
            let score = (BASE_SCORE - deduction).clamp(0.0, 100.0);
            total_issues += issues.len();
            dimensions.insert(
                dimension,
                DimensionResult {
                    name: dimension,
                    base_score: BASE_SCORE,
                    issues,
                    score,
                },
            );
        }

        let weighted: f64 = Dimension::ALL
            .iter()
            .map(|d| self.weights.weight(*d) * dimensions[d].score)
            .sum();
        let overall_score = weighted.round();
        let grade = Grade::from_score(overall_score);

        info!(
            "Audit score: {:.0} ({}) - {} issues across {} dimensions",
            overall_score,
            grade,
            total_issues,
            dimensions.len()
        );

        Ok(AuditResult {
            overall_score,
            dimensions,
            grade,
            total_issues,
        })
    }
}

/// Run an audit with the built-in dimension weights.
pub fn compute_audit(input: &AuditInput) -> Result<AuditResult, ScoreError> {
    let weights = AuditWeights::default();
    AuditCalculator::new(&weights).audit(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::IssueCatalog;

    fn empty_input() -> AuditInput {
        let mut input = AuditInput::default();
        for dimension in Dimension::ALL {
            input.dimensions.insert(dimension, vec![]);
        }
        input
    }

    #[test]
    fn test_clean_account_scores_100() {
        let result = compute_audit(&empty_input()).unwrap();
        assert_eq!(result.overall_score, 100.0);
        assert_eq!(result.grade, Grade::A);
        assert_eq!(result.total_issues, 0);
        for dimension in Dimension::ALL {
            assert_eq!(result.dimensions[&dimension].score, 100.0);
        }
    }

    #[test]
    fn test_missing_dimension_is_rejected() {
        let mut input = empty_input();
        input.dimensions.remove(&Dimension::Budget);
        let err = compute_audit(&input).unwrap_err();
        assert_eq!(err, ScoreError::MissingDimension(Dimension::Budget));
    }

    #[test]
    fn test_deductions_subtract_from_base() {
        let catalog = IssueCatalog::builtin();
        let mut input = empty_input();
        // 18 + 12 = 30 points off the audience dimension
        input.dimensions.insert(
            Dimension::Audience,
            vec![
                catalog.create_issue("audience_overlap").unwrap(),
                catalog.create_issue("broad_targeting").unwrap(),
            ],
        );
        let result = compute_audit(&input).unwrap();
        assert_eq!(result.dimensions[&Dimension::Audience].score, 70.0);
        assert_eq!(result.total_issues, 2);
        // Other dimensions untouched
        assert_eq!(result.dimensions[&Dimension::Structure].score, 100.0);
    }

    #[test]
    fn test_dimension_score_clamps_at_zero() {
        let catalog = IssueCatalog::builtin();
        let mut input = empty_input();
        // Every structure issue at once deducts more than 100 points
        let all_structure: Vec<_> = crate::catalog::STRUCTURE_ISSUES
            .iter()
            .map(|spec| catalog.create_issue(spec.code).unwrap())
            .collect();
        let deduction: f64 = all_structure.iter().map(|i| i.point_deduction).sum();
        assert!(deduction > 100.0);

        input.dimensions.insert(Dimension::Structure, all_structure);
        let result = compute_audit(&input).unwrap();
        assert_eq!(result.dimensions[&Dimension::Structure].score, 0.0);
        assert!(result.overall_score >= 0.0);
    }

    #[test]
    fn test_overall_score_uses_dimension_weights() {
        let weights = AuditWeights {
            structure: 1.0,
            creative: 0.0,
            audience: 0.0,
            budget: 0.0,
            tracking: 0.0,
        };
        let catalog = IssueCatalog::builtin();
        let mut input = empty_input();
        input.dimensions.insert(
            Dimension::Structure,
            vec![catalog.create_issue("overlapping_campaigns").unwrap()],
        );
        // Everything else broken contributes nothing under these weights
        input.dimensions.insert(
            Dimension::Tracking,
            vec![catalog.create_issue("missing_pixel").unwrap()],
        );

        let result = AuditCalculator::new(&weights).audit(&input).unwrap();
        assert_eq!(result.overall_score, 82.0);
        assert_eq!(result.grade, Grade::B);
    }

    #[test]
    fn test_overall_score_is_rounded() {
        let catalog = IssueCatalog::builtin();
        let mut input = empty_input();
        input.dimensions.insert(
            Dimension::Tracking,
            vec![catalog.create_issue("no_utm_tags").unwrap()],
        );
        // 5 points off tracking at weight 0.15 -> 99.25 -> rounds to 99
        let result = compute_audit(&input).unwrap();
        assert_eq!(result.overall_score, 99.0);
    }

    #[test]
    fn test_grade_bands_exhaustive_over_scores() {
        // Every integer score maps to exactly one grade
        for score in 0..=100 {
            let grade = Grade::from_score(f64::from(score));
            let expected = match score {
                90..=100 => Grade::A,
                75..=89 => Grade::B,
                60..=74 => Grade::C,
                40..=59 => Grade::D,
                _ => Grade::F,
            };
            assert_eq!(grade, expected, "score={}", score);
        }
    }

    #[test]
    fn test_audit_is_deterministic() {
        let catalog = IssueCatalog::builtin();
        let mut input = empty_input();
        input.dimensions.insert(
            Dimension::Budget,
            vec![catalog.create_issue("underspending").unwrap()],
        );
        let first = compute_audit(&input).unwrap();
        let second = compute_audit(&input).unwrap();
        assert_eq!(first.overall_score, second.overall_score);
        assert_eq!(first.grade, second.grade);
    }
}
