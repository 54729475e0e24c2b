//! METRIC 3: SKILL FIT
//!
//! Technical ability, willingness to pick up new tools, and day-to-day
//! organization, each compared against what the model demands (capacity).

use crate::catalog::BusinessModel;
use crate::quiz::QuizData;
use crate::utils::fit::{weighted_fit, AttributeFit};
use crate::utils::normalization::rating_normalize;
use super::Attribute;

/// Result of M3 calculation
#[derive(Debug, Clone)]
pub struct M3Result {
    /// Weighted fit (0..1)
    pub raw: f64,
    /// Display score (0-100, HIGH = GOOD)
    pub norm: f64,
    pub fits: Vec<AttributeFit>,
    /// Skills where the respondent falls short, largest weighted gap first
    pub skill_gaps: Vec<Attribute>,
}

/// Calculate M3: Skill Fit
pub fn calculate_m3(quiz: &QuizData, model: &BusinessModel) -> M3Result {
    let fits = vec![
        AttributeFit::new(
            Attribute::TechSkills,
            rating_normalize(quiz.tech_skills_rating),
            rating_normalize(model.tech_skill),
            model.weight_for(Attribute::TechSkills),
        ),
        AttributeFit::new(
            Attribute::ToolLearning,
            rating_normalize(quiz.tool_learning_willingness.as_rating()),
            rating_normalize(model.tool_intensity),
            model.weight_for(Attribute::ToolLearning),
        ),
        AttributeFit::new(
            Attribute::Organization,
            rating_normalize(quiz.organization_level),
            rating_normalize(model.organization),
            model.weight_for(Attribute::Organization),
        ),
    ];

    let skill_gaps = gaps_by_weight(&fits);
    let raw = weighted_fit(&fits);

    M3Result {
        raw,
        norm: raw * 100.0,
        fits,
        skill_gaps,
    }
}

/// Attributes with any shortfall, ordered by weighted gap (largest first)
pub(crate) fn gaps_by_weight(fits: &[AttributeFit]) -> Vec<Attribute> {
    let mut gaps: Vec<&AttributeFit> = fits
        .iter()
        .filter(|f| f.fit < 1.0 && f.weight > 0.0)
        .collect();
    gaps.sort_by(|a, b| b.weighted_gap().total_cmp(&a.weighted_gap()));
    gaps.into_iter().map(|f| f.attribute).collect()
}
