//! Integration tests for the adscore engine
//!
//! These tests exercise the public library API end to end to verify:
//! - Fatigue scores stay in range with correct status banding
//! - Audit scores clamp, weight, and grade correctly
//! - Priority scores match the documented arithmetic
//! - Caller-contract violations fail fast with typed errors
//! - Result records serialize to the expected JSON wire shape

use adscore::catalog::IssueCatalog;
use adscore::config::AuditWeights;
use adscore::models::{
    AuditInput, Difficulty, Dimension, FatigueInput, FatigueStatus, Grade, RecommendationInput,
    Severity,
};
use adscore::{
    compute_audit, compute_fatigue, compute_priority, AuditCalculator, ScoreError,
    FATIGUE_ALERT_THRESHOLD,
};
use std::collections::BTreeMap;

fn clean_audit_input() -> AuditInput {
    let mut input = AuditInput::default();
    for dimension in Dimension::ALL {
        input.dimensions.insert(dimension, vec![]);
    }
    input
}

#[test]
fn fatigue_scenario_recommends_pausing() {
    // A creative with falling CTR/conversions, high frequency, a month old
    let result = compute_fatigue(&FatigueInput {
        ctr_change: -25.0,
        frequency: 4.2,
        days_active: 28.0,
        conversion_rate_change: -15.0,
    });
    assert!(result.score >= FATIGUE_ALERT_THRESHOLD);
    assert_eq!(result.status, FatigueStatus::Fatigued);
}

#[test]
fn fatigue_score_always_in_range() {
    let extremes = [
        (-100.0, 0.0, 0.0, -100.0),
        (100.0, 1e9, 1e9, 100.0),
        (f64::NAN, f64::NAN, f64::NAN, f64::NAN),
        (f64::NEG_INFINITY, f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY),
        (0.0, 0.0, 0.0, 0.0),
    ];
    for (ctr, freq, days, conv) in extremes {
        let result = compute_fatigue(&FatigueInput {
            ctr_change: ctr,
            frequency: freq,
            days_active: days,
            conversion_rate_change: conv,
        });
        assert!((0.0..=100.0).contains(&result.score));
        // Status is a pure function of score
        let expected = if result.score >= 70.0 {
            FatigueStatus::Fatigued
        } else if result.score >= 40.0 {
            FatigueStatus::Warning
        } else {
            FatigueStatus::Healthy
        };
        assert_eq!(result.status, expected);
    }
}

#[test]
fn audit_with_no_issues_is_a_perfect_a() {
    let result = compute_audit(&clean_audit_input()).unwrap();
    assert_eq!(result.overall_score, 100.0);
    assert_eq!(result.grade, Grade::A);
    assert_eq!(result.total_issues, 0);
}

#[test]
fn audit_clamps_overloaded_dimension_at_zero() {
    let catalog = IssueCatalog::builtin();
    let mut input = clean_audit_input();
    // Stack the same critical tracking issue until deductions exceed 100
    let issues: Vec<_> = (0..5)
        .map(|_| catalog.create_issue("missing_pixel").unwrap())
        .collect();
    input.dimensions.insert(Dimension::Tracking, issues);

    let result = compute_audit(&input).unwrap();
    assert_eq!(result.dimensions[&Dimension::Tracking].score, 0.0);
    assert!(result.overall_score >= 0.0);
    assert!(result.overall_score <= 100.0);
    assert_eq!(result.total_issues, 5);
}

#[test]
fn audit_rejects_missing_dimension() {
    let mut input = clean_audit_input();
    input.dimensions.remove(&Dimension::Creative);
    assert_eq!(
        compute_audit(&input).unwrap_err(),
        ScoreError::MissingDimension(Dimension::Creative)
    );
}

#[test]
fn audit_rejects_unknown_issue_code() {
    let catalog = IssueCatalog::builtin();
    let mut codes: BTreeMap<Dimension, Vec<String>> = BTreeMap::new();
    for dimension in Dimension::ALL {
        codes.insert(dimension, vec![]);
    }
    codes.insert(Dimension::Budget, vec!["spend_it_all".to_string()]);
    assert_eq!(
        catalog.audit_input(&codes).unwrap_err(),
        ScoreError::UnknownIssueCode("spend_it_all".to_string())
    );
}

#[test]
fn audit_respects_injected_weights() {
    let catalog = IssueCatalog::builtin();
    let mut input = clean_audit_input();
    input.dimensions.insert(
        Dimension::Tracking,
        vec![catalog.create_issue("no_conversion_events").unwrap()],
    );

    let tracking_only = AuditWeights {
        structure: 0.0,
        creative: 0.0,
        audience: 0.0,
        budget: 0.0,
        tracking: 1.0,
    };
    let result = AuditCalculator::new(&tracking_only).audit(&input).unwrap();
    assert_eq!(result.overall_score, 80.0);
    assert_eq!(result.grade, Grade::B);
}

#[test]
fn grade_bands_cover_every_score_exactly_once() {
    for score in 0..=100 {
        let bands = [
            (score >= 90, Grade::A),
            ((75..90).contains(&score), Grade::B),
            ((60..75).contains(&score), Grade::C),
            ((40..60).contains(&score), Grade::D),
            (score < 40, Grade::F),
        ];
        let matching: Vec<Grade> = bands
            .into_iter()
            .filter(|(hit, _)| *hit)
            .map(|(_, grade)| grade)
            .collect();
        assert_eq!(matching.len(), 1, "score {} matched {:?}", score, matching);
        assert_eq!(Grade::from_score(f64::from(score)), matching[0]);
    }
}

#[test]
fn priority_matches_documented_example() {
    let score = compute_priority(&RecommendationInput {
        severity: Severity::Critical,
        estimated_impact: 10_000.0,
        difficulty: Difficulty::Complex,
        affected_entities: 5,
    })
    .unwrap();
    assert_eq!(score, 175);
}

#[test]
fn priority_rejects_negative_impact() {
    let err = compute_priority(&RecommendationInput {
        severity: Severity::Low,
        estimated_impact: -1.0,
        difficulty: Difficulty::Easy,
        affected_entities: 0,
    })
    .unwrap_err();
    assert!(matches!(err, ScoreError::InvalidImpact(_)));
}

#[test]
fn results_serialize_as_plain_json_records() {
    let catalog = IssueCatalog::builtin();
    let mut input = clean_audit_input();
    input.dimensions.insert(
        Dimension::Audience,
        vec![catalog.create_issue("audience_overlap").unwrap()],
    );
    let audit = compute_audit(&input).unwrap();
    let audit_json: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(&audit).unwrap()).unwrap();
    assert!(audit_json["overall_score"].is_number());
    assert!(audit_json["grade"].is_string());
    assert_eq!(
        audit_json["dimensions"]["audience"]["issues"][0]["code"],
        "audience_overlap"
    );

    let fatigue = compute_fatigue(&FatigueInput {
        ctr_change: -25.0,
        frequency: 4.2,
        days_active: 28.0,
        conversion_rate_change: -15.0,
    });
    let fatigue_json: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(&fatigue).unwrap()).unwrap();
    assert_eq!(fatigue_json["status"], "fatigued");
    assert!(fatigue_json["score"].is_number());
}
