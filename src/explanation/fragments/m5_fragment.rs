use crate::catalog::BusinessModel;
use crate::explanation::types::{
    MetricFragment, RiskCard, Severity, StrengthCard, WarningCard, RISK_THRESHOLD, STRENGTH_THRESHOLD,
};
use crate::metrics::{Attribute, M5Result};
use super::{largest_weighted_gap, list_attributes, order_by_gap};

/// Generate explanation fragment for M5 (Work Style)
pub fn generate_m5_fragment(m5: &M5Result, model: &BusinessModel, display_score: f64) -> MetricFragment {
    if display_score >= STRENGTH_THRESHOLD {
        return MetricFragment::with_strength(StrengthCard {
            strength_type: "work_style_fit".to_string(),
            metric_code: "M5".to_string(),
            title: "Work Style".to_string(),
            message: "The day-to-day rhythm of this model matches how you like to work".to_string(),
            detail: format!(
                "{} usually involves {} and {}.",
                model.name,
                model.structure.display_name(),
                model.collaboration.display_name()
            ),
        });
    }

    let mut notes = Vec::new();
    if m5.structure_mismatch {
        notes.push((
            largest_weighted_gap(&m5.fits, &[Attribute::WorkStructure]),
            format!("the work usually involves {}", model.structure.display_name()),
        ));
    }
    if m5.collaboration_mismatch {
        notes.push((
            largest_weighted_gap(&m5.fits, &[Attribute::Collaboration]),
            format!("it tends toward {}", model.collaboration.display_name()),
        ));
    }
    if !m5.drive_gaps.is_empty() {
        notes.push((
            largest_weighted_gap(&m5.fits, &m5.drive_gaps),
            format!("it demands more {}", list_attributes(&m5.drive_gaps)),
        ));
    }
    let notes = order_by_gap(notes);
    let detail = if notes.is_empty() {
        "Your preferred routine differs slightly from this model's.".to_string()
    } else {
        format!("Compared with your preferences, {}.", notes.join("; "))
    };

    if display_score >= RISK_THRESHOLD {
        MetricFragment::with_warning(WarningCard {
            warning_type: "style_mismatch".to_string(),
            metric_code: "M5".to_string(),
            severity: Severity::from_score(display_score),
            icon: "⚡".to_string(),
            message: "Your work style needs some adjusting for this model".to_string(),
            detail,
            advice: "Set up routines and accountability that bridge the difference.".to_string(),
        })
    } else {
        MetricFragment::with_risk(RiskCard {
            risk_type: "style_mismatch".to_string(),
            metric_code: "M5".to_string(),
            severity: Severity::High,
            icon: "🚨".to_string(),
            title: "Work Style Conflict".to_string(),
            message: format!("{} runs very differently from how you like to work", model.name),
            detail,
            advice: "Try a short trial project before investing in this path.".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::utils::fit::AttributeFit;

    #[test]
    fn test_mismatch_warning_details() {
        let catalog = Catalog::builtin().unwrap();
        let model = catalog.get("virtual-assistant").unwrap();
        let m5 = M5Result {
            raw: 0.6,
            norm: 60.0,
            fits: vec![],
            structure_mismatch: true,
            collaboration_mismatch: false,
            drive_gaps: vec![Attribute::Consistency],
        };

        let fragment = generate_m5_fragment(&m5, model, 60.0);
        let warning = fragment.warning.unwrap();
        assert!(warning.detail.contains("clear step-by-step work"));
        assert!(warning.detail.contains("long-term consistency"));
        assert!(!warning.detail.contains("team"));
    }

    #[test]
    fn test_low_score_risk() {
        let catalog = Catalog::builtin().unwrap();
        let model = catalog.get("content-creation").unwrap();
        let m5 = M5Result {
            raw: 0.2,
            norm: 20.0,
            fits: vec![],
            structure_mismatch: true,
            collaboration_mismatch: true,
            drive_gaps: vec![],
        };

        let fragment = generate_m5_fragment(&m5, model, 20.0);
        assert_eq!(fragment.risk.unwrap().risk_type, "style_mismatch");
    }

    #[test]
    fn test_notes_follow_weighted_gap() {
        let catalog = Catalog::builtin().unwrap();
        let model = catalog.get("content-creation").unwrap();
        // Gaps: structure 1.0, self-motivation ~0.42, collaboration ~0.33
        let m5 = M5Result {
            raw: 0.3,
            norm: 30.0,
            fits: vec![
                AttributeFit::new(Attribute::WorkStructure, 0.0, 1.0, 1.0),
                AttributeFit::new(Attribute::Collaboration, 0.0, 2.0 / 3.0, 0.5),
                AttributeFit::new(Attribute::SelfMotivation, 0.5, 0.75, 1.0),
            ],
            structure_mismatch: true,
            collaboration_mismatch: true,
            drive_gaps: vec![Attribute::SelfMotivation],
        };

        let detail = generate_m5_fragment(&m5, model, 30.0).risk.unwrap().detail;
        let structure = detail.find("usually involves").unwrap();
        let drive = detail.find("demands more").unwrap();
        let collaboration = detail.find("tends toward").unwrap();
        assert!(structure < drive && drive < collaboration, "{}", detail);
    }
}
