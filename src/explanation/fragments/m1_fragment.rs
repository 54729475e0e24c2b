use crate::catalog::BusinessModel;
use crate::explanation::types::{
    MetricFragment, RiskCard, Severity, StrengthCard, WarningCard, RISK_THRESHOLD, STRENGTH_THRESHOLD,
};
use crate::metrics::M1Result;

/// Generate explanation fragment for M1 (Income Fit)
///
/// Compares the income goal against the model's typical ceiling and the
/// respondent's patience against how long the model takes to pay.
pub fn generate_m1_fragment(m1: &M1Result, model: &BusinessModel, display_score: f64) -> MetricFragment {
    let timeline = model.time_to_first_income.display_name();

    if display_score >= STRENGTH_THRESHOLD {
        return MetricFragment::with_strength(StrengthCard {
            strength_type: "income_fit".to_string(),
            metric_code: "M1".to_string(),
            title: "Income Goals".to_string(),
            message: format!(
                "{} can reach your income goal (typically up to ${}/month)",
                model.name, model.income_potential
            ),
            detail: format!("First income usually arrives within {}, which fits your timeline.", timeline),
        });
    }

    let mut problems = Vec::new();
    if let Some(gap) = m1.income_gap {
        problems.push(format!(
            "your goal is ${}/month above what this model typically earns (${}/month)",
            gap, model.income_potential
        ));
    }
    if m1.timeline_overrun > 0 {
        problems.push(format!("first income usually takes {}", timeline));
    }
    let detail = if problems.is_empty() {
        "Income potential and timeline are close to your expectations but not a clean fit.".to_string()
    } else {
        format!("{}.", capitalize(&problems.join("; ")))
    };

    if display_score >= RISK_THRESHOLD {
        MetricFragment::with_warning(WarningCard {
            warning_type: "income_stretch".to_string(),
            metric_code: "M1".to_string(),
            severity: Severity::from_score(display_score),
            icon: "⚠️".to_string(),
            message: "Income expectations are a stretch for this model".to_string(),
            detail,
            advice: "Plan for a longer ramp-up or treat this as one income stream among several.".to_string(),
        })
    } else {
        MetricFragment::with_risk(RiskCard {
            risk_type: "income_shortfall".to_string(),
            metric_code: "M1".to_string(),
            severity: Severity::High,
            icon: "🚨".to_string(),
            title: "Income Goals Unlikely".to_string(),
            message: format!("{} is unlikely to meet your income goal on your timeline", model.name),
            detail,
            advice: "Lower the target for year one or look at models with a higher ceiling.".to_string(),
        })
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn m1(income_gap: Option<u32>, timeline_overrun: u8) -> M1Result {
        M1Result {
            raw: 0.0,
            norm: 0.0,
            fits: vec![],
            income_gap,
            timeline_overrun,
        }
    }

    #[test]
    fn test_high_score_strength() {
        let catalog = Catalog::builtin().unwrap();
        let model = catalog.get("freelancing").unwrap();

        let fragment = generate_m1_fragment(&m1(None, 0), model, 95.0);
        assert!(fragment.strength.is_some());
        assert!(fragment.risk.is_none());

        let strength = fragment.strength.unwrap();
        assert_eq!(strength.metric_code, "M1");
        assert!(strength.message.contains("8000"));
    }

    #[test]
    fn test_low_score_risk_mentions_gap() {
        let catalog = Catalog::builtin().unwrap();
        let model = catalog.get("online-tutoring").unwrap();

        let fragment = generate_m1_fragment(&m1(Some(16000), 0), model, 20.0);
        assert!(fragment.strength.is_none());

        let risk = fragment.risk.unwrap();
        assert_eq!(risk.risk_type, "income_shortfall");
        assert_eq!(risk.severity, Severity::High);
        assert!(risk.detail.starts_with("Your goal is $16000/month"));
    }

    #[test]
    fn test_medium_score_warning() {
        let catalog = Catalog::builtin().unwrap();
        let model = catalog.get("saas-development").unwrap();

        let fragment = generate_m1_fragment(&m1(None, 2), model, 60.0);
        let warning = fragment.warning.unwrap();
        assert!(warning.detail.contains("6+ months"));
    }
}
