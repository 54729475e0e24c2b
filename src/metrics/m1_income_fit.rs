//! METRIC 1: INCOME FIT
//!
//! Can this business model pay what the respondent wants, as soon as they
//! need it?
//!
//! Comparisons:
//!   1. Income goal vs income potential (ceiling: the model must reach the goal)
//!   2. Timeline tolerance vs time to first income (capacity: the respondent
//!      must be able to wait as long as the model takes)

use crate::catalog::BusinessModel;
use crate::quiz::QuizData;
use crate::utils::fit::{weighted_fit, AttributeFit};
use crate::utils::normalization::normalize_income;
use super::Attribute;

/// Result of M1 calculation
#[derive(Debug, Clone)]
pub struct M1Result {
    /// Weighted fit (0..1)
    pub raw: f64,
    /// Display score (0-100, HIGH = GOOD)
    pub norm: f64,
    pub fits: Vec<AttributeFit>,
    /// Dollars per month the goal exceeds the model's typical ceiling
    pub income_gap: Option<u32>,
    /// Timeline steps the model takes beyond what the respondent can wait
    pub timeline_overrun: u8,
}

/// Calculate M1: Income Fit
pub fn calculate_m1(quiz: &QuizData, model: &BusinessModel) -> M1Result {
    let fits = vec![
        AttributeFit::new(
            Attribute::IncomeGoal,
            normalize_income(quiz.success_income_goal),
            normalize_income(model.income_potential),
            model.weight_for(Attribute::IncomeGoal),
        ),
        AttributeFit::new(
            Attribute::FirstIncomeTimeline,
            quiz.first_income_timeline.ordinal(),
            model.time_to_first_income.ordinal(),
            model.weight_for(Attribute::FirstIncomeTimeline),
        ),
    ];

    let income_gap = quiz
        .success_income_goal
        .checked_sub(model.income_potential)
        .filter(|gap| *gap > 0);

    let timeline_overrun = (model.time_to_first_income as u8)
        .saturating_sub(quiz.first_income_timeline as u8);

    let raw = weighted_fit(&fits);

    M1Result {
        raw,
        norm: raw * 100.0,
        fits,
        income_gap,
        timeline_overrun,
    }
}
