use crate::catalog::BusinessModel;
use crate::explanation::types::{
    MetricFragment, Severity, StrengthCard, WarningCard, STRENGTH_THRESHOLD,
};
use crate::metrics::M6Result;
use crate::quiz::QuizData;

/// Generate explanation fragment for M6 (Motivation)
///
/// Never produces a risk card: a motivation mismatch alone is not a reason
/// to rule a model out.
pub fn generate_m6_fragment(
    m6: &M6Result,
    model: &BusinessModel,
    quiz: &QuizData,
    display_score: f64,
) -> MetricFragment {
    let motivation = quiz.main_motivation.display_name();
    let learning = quiz.learning_preference.display_name();

    if display_score >= STRENGTH_THRESHOLD {
        let detail = if m6.learning_match {
            format!("Most people learn this path through {}, which is how you prefer to learn.", learning)
        } else {
            let usual: Vec<&str> = model.learning_styles.iter().map(|s| s.display_name()).collect();
            format!(
                "Your preferred way to learn, {}, is less common here (usually {}).",
                learning,
                usual.join(" or ")
            )
        };
        return MetricFragment::with_strength(StrengthCard {
            strength_type: "motivation_fit".to_string(),
            metric_code: "M6".to_string(),
            title: "Motivation".to_string(),
            message: format!("This model rewards what drives you: {}", motivation),
            detail,
        });
    }

    let (message, detail) = match (m6.motivation_match, m6.learning_match) {
        (false, false) => (
            "This model serves different goals than yours",
            format!("It is rarely chosen for {} and is usually learned through other means than {}.", motivation, learning),
        ),
        (false, true) => (
            "This model serves different goals than yours",
            format!("It is rarely chosen for {}.", motivation),
        ),
        (true, false) => (
            "The usual learning path differs from your preference",
            format!("This model is seldom learned through {}.", learning),
        ),
        (true, true) => (
            "Motivation is a partial match",
            "Your goals line up with this model.".to_string(),
        ),
    };

    MetricFragment::with_warning(WarningCard {
        warning_type: "motivation_mismatch".to_string(),
        metric_code: "M6".to_string(),
        severity: if m6.motivation_match { Severity::Info } else { Severity::Low },
        icon: "💡".to_string(),
        message: message.to_string(),
        detail,
        advice: "Check that the everyday work would keep you engaged past the first few months.".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::quiz::fixtures::balanced_quiz;

    fn m6(motivation_match: bool, learning_match: bool) -> M6Result {
        M6Result {
            raw: 0.0,
            norm: 0.0,
            fits: vec![],
            motivation_match,
            learning_match,
        }
    }

    fn coaching() -> BusinessModel {
        // Learned through mentorship or reading
        Catalog::builtin().unwrap().get("online-coaching").unwrap().clone()
    }

    #[test]
    fn test_full_match_strength() {
        let fragment = generate_m6_fragment(&m6(true, true), &coaching(), &balanced_quiz(), 100.0);
        let strength = fragment.strength.unwrap();
        assert!(strength.message.contains("flexibility"));
        assert!(strength.detail.contains("video courses"));
    }

    #[test]
    fn test_mismatch_is_warning_not_risk() {
        let fragment = generate_m6_fragment(&m6(false, false), &coaching(), &balanced_quiz(), 35.0);
        assert!(fragment.risk.is_none());

        let warning = fragment.warning.unwrap();
        assert_eq!(warning.severity, Severity::Low);
        assert!(warning.detail.contains("flexibility"));
    }

    #[test]
    fn test_learning_only_mismatch() {
        // Motivation match with a learning miss still clears the strength threshold
        let fragment = generate_m6_fragment(&m6(true, false), &coaching(), &balanced_quiz(), 83.75);
        let strength = fragment.strength.unwrap();
        assert!(!strength.detail.contains("which is how you prefer to learn"));
        assert!(strength.detail.contains("video courses, is less common here"));
        assert!(strength.detail.contains("usually mentorship or reading"));

        let fragment = generate_m6_fragment(&m6(true, false), &coaching(), &balanced_quiz(), 60.0);
        assert_eq!(fragment.warning.unwrap().severity, Severity::Info);
    }
}
