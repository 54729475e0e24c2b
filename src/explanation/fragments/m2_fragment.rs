use crate::catalog::BusinessModel;
use crate::explanation::types::{
    MetricFragment, RiskCard, Severity, StrengthCard, WarningCard, RISK_THRESHOLD, STRENGTH_THRESHOLD,
};
use crate::metrics::M2Result;

/// Generate explanation fragment for M2 (Time & Budget)
pub fn generate_m2_fragment(m2: &M2Result, model: &BusinessModel, display_score: f64) -> MetricFragment {
    if display_score >= STRENGTH_THRESHOLD {
        return MetricFragment::with_strength(StrengthCard {
            strength_type: "resource_fit".to_string(),
            metric_code: "M2".to_string(),
            title: "Time & Budget".to_string(),
            message: "You have the time and money this model needs to get started".to_string(),
            detail: format!(
                "Typical startup cost is ${} with about {} hours per week.",
                model.startup_cost, model.hours_per_week
            ),
        });
    }

    let mut shortfalls = Vec::new();
    if let Some(budget) = m2.budget_shortfall {
        shortfalls.push(format!("${} short of the typical ${} startup cost", budget, model.startup_cost));
    }
    if let Some(hours) = m2.hours_shortfall {
        shortfalls.push(format!("{} hours/week short of the usual {}", hours, model.hours_per_week));
    }
    let detail = if shortfalls.is_empty() {
        "Your resources are close to what this model needs.".to_string()
    } else {
        format!("You are {}.", shortfalls.join(" and "))
    };

    if display_score >= RISK_THRESHOLD {
        MetricFragment::with_warning(WarningCard {
            warning_type: "resource_gap".to_string(),
            metric_code: "M2".to_string(),
            severity: Severity::from_score(display_score),
            icon: "⚡".to_string(),
            message: "Resources are tight for this model".to_string(),
            detail,
            advice: "Start lean: reuse free tools and grow hours as the first income arrives.".to_string(),
        })
    } else {
        MetricFragment::with_risk(RiskCard {
            risk_type: "resource_shortfall".to_string(),
            metric_code: "M2".to_string(),
            severity: Severity::High,
            icon: "🚨".to_string(),
            title: "Not Enough Time or Budget".to_string(),
            message: format!("{} needs more time or money than you have available", model.name),
            detail,
            advice: "Build savings or free up hours first, or pick a lower-cost model.".to_string(),
        })
    }
}
