use crate::catalog::BusinessModel;
use crate::explanation::types::{
    MetricFragment, RiskCard, Severity, StrengthCard, WarningCard, RISK_THRESHOLD, STRENGTH_THRESHOLD,
};
use crate::metrics::M3Result;
use super::list_attributes;

/// Generate explanation fragment for M3 (Skills)
///
/// Gaps are listed largest weighted gap first.
pub fn generate_m3_fragment(m3: &M3Result, model: &BusinessModel, display_score: f64) -> MetricFragment {
    if display_score >= STRENGTH_THRESHOLD {
        return MetricFragment::with_strength(StrengthCard {
            strength_type: "skill_fit".to_string(),
            metric_code: "M3".to_string(),
            title: "Skills".to_string(),
            message: format!("Your skills cover what {} demands", model.name),
            detail: format!(
                "Technical demand {}/5, tooling {}/5, organization {}/5.",
                model.tech_skill, model.tool_intensity, model.organization
            ),
        });
    }

    let gaps = list_attributes(&m3.skill_gaps);

    if display_score >= RISK_THRESHOLD {
        MetricFragment::with_warning(WarningCard {
            warning_type: "skill_gap".to_string(),
            metric_code: "M3".to_string(),
            severity: Severity::from_score(display_score),
            icon: "⚠️".to_string(),
            message: "Some skills need work".to_string(),
            detail: format!("Expect a learning curve in {}.", gaps),
            advice: "A short course or template pack usually closes gaps of this size.".to_string(),
        })
    } else {
        MetricFragment::with_risk(RiskCard {
            risk_type: "skill_gap".to_string(),
            metric_code: "M3".to_string(),
            severity: Severity::High,
            icon: "🚨".to_string(),
            title: "Significant Skill Gap".to_string(),
            message: format!("{} relies on skills you rated low", model.name),
            detail: format!("Largest gaps: {}.", gaps),
            advice: "Budget several months of learning before expecting income, or partner with someone technical.".to_string(),
        })
    }
}
