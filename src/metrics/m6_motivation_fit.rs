//! METRIC 6: MOTIVATION FIT
//!
//! Categorical: is the respondent's main motivation one the model serves, and
//! does the model's usual learning path suit how they like to learn?

use crate::catalog::BusinessModel;
use crate::quiz::QuizData;
use crate::utils::fit::{weighted_fit, AttributeFit};
use super::Attribute;

/// Result of M6 calculation
#[derive(Debug, Clone)]
pub struct M6Result {
    /// Weighted fit (0..1)
    pub raw: f64,
    /// Display score (0-100, HIGH = GOOD)
    pub norm: f64,
    pub fits: Vec<AttributeFit>,
    pub motivation_match: bool,
    pub learning_match: bool,
}

fn membership(matched: bool) -> f64 {
    if matched { 1.0 } else { 0.0 }
}

/// Calculate M6: Motivation Fit
pub fn calculate_m6(quiz: &QuizData, model: &BusinessModel) -> M6Result {
    let motivation_match = model.motivations.contains(&quiz.main_motivation);
    let learning_match = model.learning_styles.contains(&quiz.learning_preference);

    let fits = vec![
        AttributeFit::new(
            Attribute::MainMotivation,
            membership(motivation_match),
            1.0,
            model.weight_for(Attribute::MainMotivation),
        ),
        AttributeFit::new(
            Attribute::LearningStyle,
            membership(learning_match),
            1.0,
            model.weight_for(Attribute::LearningStyle),
        ),
    ];

    let raw = weighted_fit(&fits);

    M6Result {
        raw,
        norm: raw * 100.0,
        fits,
        motivation_match,
        learning_match,
    }
}
