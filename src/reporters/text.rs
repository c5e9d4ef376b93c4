//! Text (terminal) reporter with colors and formatting

use crate::models::{
    AuditResult, CreativeFatigue, Dimension, FatigueStatus, Grade, RankedRecommendation, Severity,
};

/// Grade colors (ANSI escape codes)
fn grade_color(grade: Grade) -> &'static str {
    match grade {
        Grade::A => "\x1b[32m",  // Green
        Grade::B => "\x1b[92m",  // Light green
        Grade::C => "\x1b[33m",  // Yellow
        Grade::D => "\x1b[91m",  // Light red
        Grade::F => "\x1b[31m",  // Red
    }
}

/// Severity colors
fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "\x1b[31m", // Red
        Severity::High => "\x1b[91m",     // Light red
        Severity::Medium => "\x1b[33m",   // Yellow
        Severity::Low => "\x1b[34m",      // Blue
    }
}

/// Status colors
fn status_color(status: FatigueStatus) -> &'static str {
    match status {
        FatigueStatus::Healthy => "\x1b[32m",  // Green
        FatigueStatus::Warning => "\x1b[33m",  // Yellow
        FatigueStatus::Fatigued => "\x1b[31m", // Red
    }
}

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Severity tag
fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "[C]",
        Severity::High => "[H]",
        Severity::Medium => "[M]",
        Severity::Low => "[L]",
    }
}

/// Render an audit result as formatted terminal output
pub fn render_audit(result: &AuditResult) -> String {
    let mut out = String::new();

    let grade_c = grade_color(result.grade);
    out.push_str(&format!("\n{BOLD}Account Health Audit{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Score: {BOLD}{:.0}/100{RESET}  Grade: {grade_c}{BOLD}{}{RESET}  Issues: {}\n\n",
        result.overall_score, result.grade, result.total_issues
    ));

    out.push_str(&format!("{BOLD}DIMENSIONS{RESET}\n"));
    for dimension in Dimension::ALL {
        let dim_result = &result.dimensions[&dimension];
        out.push_str(&format!(
            "  {:<10} {:>5.0}/100  ({} issues)\n",
            dimension.to_string(),
            dim_result.score,
            dim_result.issues.len()
        ));
        for issue in &dim_result.issues {
            let sev_c = severity_color(issue.severity);
            out.push_str(&format!(
                "    {sev_c}{}{RESET} {} {DIM}(-{:.0} pts){RESET}\n",
                severity_tag(issue.severity),
                issue.title,
                issue.point_deduction
            ));
        }
    }
    out.push('\n');

    out
}

/// Render batch fatigue results as formatted terminal output
pub fn render_fatigue(creatives: &[CreativeFatigue]) -> String {
    let mut out = String::new();

    let fatigued = creatives
        .iter()
        .filter(|c| c.fatigue.status == FatigueStatus::Fatigued)
        .count();

    out.push_str(&format!("\n{BOLD}Creative Fatigue{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Creatives: {}  Fatigued: {}\n\n",
        creatives.len(),
        fatigued
    ));

    for creative in creatives {
        let status_c = status_color(creative.fatigue.status);
        out.push_str(&format!(
            "  {:<24} {:>5.1}  {status_c}{}{RESET}\n",
            creative.creative_id, creative.fatigue.score, creative.fatigue.status
        ));
    }
    out.push('\n');

    out
}

/// Render a ranked recommendation list as formatted terminal output
pub fn render_rankings(recommendations: &[RankedRecommendation]) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{BOLD}Recommendations{RESET} (most urgent first)\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));

    for (i, rec) in recommendations.iter().enumerate() {
        let sev_c = severity_color(rec.severity);
        out.push_str(&format!(
            "  {:>2}. {sev_c}{}{RESET} {} {DIM}(score {}, ${:.0}, {} entities, {}){RESET}\n",
            i + 1,
            severity_tag(rec.severity),
            rec.title,
            rec.priority_score,
            rec.estimated_impact,
            rec.affected_entities,
            rec.difficulty
        ));
    }
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, FatigueResult};
    use crate::scoring::compute_audit;
    use std::collections::BTreeMap;

    fn empty_audit() -> AuditResult {
        let mut dimensions = BTreeMap::new();
        for dimension in Dimension::ALL {
            dimensions.insert(dimension, vec![]);
        }
        compute_audit(&crate::models::AuditInput { dimensions }).unwrap()
    }

    #[test]
    fn test_render_audit_contains_grade_and_dimensions() {
        let rendered = render_audit(&empty_audit());
        assert!(rendered.contains("Account Health Audit"));
        assert!(rendered.contains("100/100"));
        for dimension in Dimension::ALL {
            assert!(rendered.contains(dimension.as_str()));
        }
    }

    #[test]
    fn test_render_fatigue_lists_creatives() {
        let creatives = vec![CreativeFatigue {
            creative_id: "cr_1".to_string(),
            fatigue: FatigueResult {
                score: 81.0,
                status: FatigueStatus::Fatigued,
            },
        }];
        let rendered = render_fatigue(&creatives);
        assert!(rendered.contains("cr_1"));
        assert!(rendered.contains("fatigued"));
        assert!(rendered.contains("Fatigued: 1"));
    }

    #[test]
    fn test_render_rankings_numbered() {
        let recs = vec![RankedRecommendation {
            id: "rec_1".to_string(),
            title: "Pause fatigued creatives".to_string(),
            severity: Severity::High,
            estimated_impact: 1200.0,
            difficulty: Difficulty::OneClick,
            affected_entities: 4,
            priority_score: 132,
        }];
        let rendered = render_rankings(&recs);
        assert!(rendered.contains("1."));
        assert!(rendered.contains("Pause fatigued creatives"));
        assert!(rendered.contains("score 132"));
    }
}
