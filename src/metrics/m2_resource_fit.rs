//! METRIC 2: RESOURCE FIT (TIME & BUDGET)
//!
//! Does the respondent have the money and the weekly hours the model needs
//! to get off the ground?
//!
//! Comparisons (both capacity):
//!   1. Upfront investment vs startup cost
//!   2. Weekly time commitment vs hours per week

use crate::catalog::BusinessModel;
use crate::quiz::QuizData;
use crate::utils::fit::{weighted_fit, AttributeFit};
use crate::utils::normalization::{normalize_hours, normalize_investment};
use super::Attribute;

/// Result of M2 calculation
#[derive(Debug, Clone)]
pub struct M2Result {
    /// Weighted fit (0..1)
    pub raw: f64,
    /// Display score (0-100, HIGH = GOOD)
    pub norm: f64,
    pub fits: Vec<AttributeFit>,
    /// USD missing from the startup budget
    pub budget_shortfall: Option<u32>,
    /// Hours per week missing
    pub hours_shortfall: Option<u32>,
}

/// Calculate M2: Resource Fit
pub fn calculate_m2(quiz: &QuizData, model: &BusinessModel) -> M2Result {
    let fits = vec![
        AttributeFit::new(
            Attribute::StartupBudget,
            normalize_investment(quiz.upfront_investment),
            normalize_investment(model.startup_cost),
            model.weight_for(Attribute::StartupBudget),
        ),
        AttributeFit::new(
            Attribute::WeeklyHours,
            normalize_hours(quiz.weekly_time_commitment),
            normalize_hours(model.hours_per_week),
            model.weight_for(Attribute::WeeklyHours),
        ),
    ];

    let budget_shortfall = model
        .startup_cost
        .checked_sub(quiz.upfront_investment)
        .filter(|gap| *gap > 0);
    let hours_shortfall = model
        .hours_per_week
        .checked_sub(quiz.weekly_time_commitment)
        .filter(|gap| *gap > 0);

    let raw = weighted_fit(&fits);

    M2Result {
        raw,
        norm: raw * 100.0,
        fits,
        budget_shortfall,
        hours_shortfall,
    }
}
