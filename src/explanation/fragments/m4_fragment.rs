use crate::catalog::BusinessModel;
use crate::explanation::types::{
    MetricFragment, RiskCard, Severity, StrengthCard, WarningCard, RISK_THRESHOLD, STRENGTH_THRESHOLD,
};
use crate::metrics::{Attribute, M4Result};
use super::{largest_weighted_gap, list_attributes, order_by_gap};

/// Creative alignment below this is called out separately
const CREATIVE_MISMATCH: f64 = 0.5;

/// Generate explanation fragment for M4 (Personality)
pub fn generate_m4_fragment(m4: &M4Result, model: &BusinessModel, display_score: f64) -> MetricFragment {
    if display_score >= STRENGTH_THRESHOLD {
        return MetricFragment::with_strength(StrengthCard {
            strength_type: "personality_fit".to_string(),
            metric_code: "M4".to_string(),
            title: "Personality".to_string(),
            message: format!("Your temperament suits {}", model.name),
            detail: "You are comfortable with the risk, selling and visibility this model involves.".to_string(),
        });
    }

    let mut notes = Vec::new();
    if !m4.comfort_gaps.is_empty() {
        notes.push((
            largest_weighted_gap(&m4.fits, &m4.comfort_gaps),
            format!("it demands more comfort with {} than you have", list_attributes(&m4.comfort_gaps)),
        ));
    }
    if m4.creative_alignment < CREATIVE_MISMATCH {
        let direction = if model.creativity >= 4 { "more" } else { "less" };
        notes.push((
            largest_weighted_gap(&m4.fits, &[Attribute::Creativity]),
            format!("the work is {} creative than you would like", direction),
        ));
    }
    let notes = order_by_gap(notes);
    let detail = if notes.is_empty() {
        "Several personality traits are only a partial match.".to_string()
    } else {
        format!("In this model {}.", notes.join(", and "))
    };

    if display_score >= RISK_THRESHOLD {
        MetricFragment::with_warning(WarningCard {
            warning_type: "comfort_zone".to_string(),
            metric_code: "M4".to_string(),
            severity: Severity::from_score(display_score),
            icon: "⚠️".to_string(),
            message: "This model will push you out of your comfort zone".to_string(),
            detail,
            advice: "Start with low-stakes practice before committing fully.".to_string(),
        })
    } else {
        MetricFragment::with_risk(RiskCard {
            risk_type: "personality_mismatch".to_string(),
            metric_code: "M4".to_string(),
            severity: Severity::High,
            icon: "🚨".to_string(),
            title: "Personality Mismatch".to_string(),
            message: format!("{} clashes with how you like to work with people and risk", model.name),
            detail,
            advice: "Consider a model where someone else handles sales or public presence.".to_string(),
        })
    }
}
