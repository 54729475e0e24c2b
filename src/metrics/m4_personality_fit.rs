//! METRIC 4: PERSONALITY FIT
//!
//! Comfort with risk, selling and being visible (capacity), plus how closely
//! the respondent's appetite for creative work matches the model's
//! (closeness: too much or too little creativity both count against it).

use crate::catalog::BusinessModel;
use crate::quiz::QuizData;
use crate::utils::fit::{weighted_fit, AttributeFit};
use crate::utils::normalization::rating_normalize;
use super::m3_skill_fit::gaps_by_weight;
use super::Attribute;

/// Result of M4 calculation
#[derive(Debug, Clone)]
pub struct M4Result {
    /// Weighted fit (0..1)
    pub raw: f64,
    /// Display score (0-100, HIGH = GOOD)
    pub norm: f64,
    pub fits: Vec<AttributeFit>,
    /// Comfort shortfalls (risk, selling, visibility), largest weighted gap first
    pub comfort_gaps: Vec<Attribute>,
    /// Closeness of creative appetite to the model (0..1)
    pub creative_alignment: f64,
}

/// Calculate M4: Personality Fit
pub fn calculate_m4(quiz: &QuizData, model: &BusinessModel) -> M4Result {
    let fits = vec![
        AttributeFit::new(
            Attribute::RiskTolerance,
            rating_normalize(quiz.risk_comfort_level),
            rating_normalize(model.risk_level),
            model.weight_for(Attribute::RiskTolerance),
        ),
        AttributeFit::new(
            Attribute::DirectSelling,
            rating_normalize(quiz.direct_selling_comfort),
            rating_normalize(model.selling_intensity),
            model.weight_for(Attribute::DirectSelling),
        ),
        AttributeFit::new(
            Attribute::BrandFace,
            rating_normalize(quiz.brand_face_comfort),
            rating_normalize(model.visibility),
            model.weight_for(Attribute::BrandFace),
        ),
        AttributeFit::new(
            Attribute::Creativity,
            rating_normalize(quiz.creative_work_enjoyment),
            rating_normalize(model.creativity),
            model.weight_for(Attribute::Creativity),
        ),
    ];

    let comfort_gaps = gaps_by_weight(&fits[..3]);
    let creative_alignment = fits[3].fit;
    let raw = weighted_fit(&fits);

    M4Result {
        raw,
        norm: raw * 100.0,
        fits,
        comfort_gaps,
        creative_alignment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::quiz::fixtures::balanced_quiz;
    use approx::assert_relative_eq;

    #[test]
    fn test_camera_shy_user_vs_content_creation() {
        let catalog = Catalog::builtin().unwrap();
        let content = catalog.get("content-creation").unwrap();

        let mut quiz = balanced_quiz();
        quiz.brand_face_comfort = 1;
        quiz.creative_work_enjoyment = 5;

        let m4 = calculate_m4(&quiz, content);
        assert_eq!(m4.comfort_gaps.first(), Some(&Attribute::BrandFace));
        assert_relative_eq!(m4.creative_alignment, 1.0);
    }

    #[test]
    fn test_creativity_is_two_sided() {
        let catalog = Catalog::builtin().unwrap();
        // Virtual assistant work has creativity 1
        let va = catalog.get("virtual-assistant").unwrap();

        let mut quiz = balanced_quiz();
        quiz.creative_work_enjoyment = 5;

        let m4 = calculate_m4(&quiz, va);
        assert_relative_eq!(m4.creative_alignment, 0.0);
        // Creativity is never reported as a comfort gap
        assert!(!m4.comfort_gaps.contains(&Attribute::Creativity));
    }
}
