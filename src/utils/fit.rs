//! Attribute fit functions
//!
//! Every comparison takes two values already on the 0..1 scale and returns a
//! fit in 0..1 (1 = perfect).

use serde::Serialize;
use crate::metrics::Attribute;

/// Gap (on the 0..1 scale) at which a capacity/ceiling fit reaches zero
pub const DEFICIT_SPAN: f64 = 0.6;

/// Fit awarded when a categorical answer is not in the model's list
pub const CATEGORICAL_MISS: f64 = 0.35;

/// How a user value is compared against a model value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// User must bring at least what the model demands
    Capacity,
    /// Model must reach at least what the user asks for
    Ceiling,
    /// Closer is better in either direction
    Closeness,
    /// Membership in the model's list
    Categorical,
}

/// Shortfall fit: full marks when `supply >= demand`, linear falloff otherwise
pub fn shortfall_fit(supply: f64, demand: f64) -> f64 {
    if supply >= demand {
        1.0
    } else {
        (1.0 - (demand - supply) / DEFICIT_SPAN).max(0.0)
    }
}

pub fn closeness_fit(user: f64, model: f64) -> f64 {
    (1.0 - (user - model).abs()).clamp(0.0, 1.0)
}

pub fn categorical_fit(matched: bool) -> f64 {
    if matched { 1.0 } else { CATEGORICAL_MISS }
}

/// Apply a comparison rule to normalized user/model values
pub fn compare(rule: Comparison, user: f64, model: f64) -> f64 {
    match rule {
        Comparison::Capacity => shortfall_fit(user, model),
        Comparison::Ceiling => shortfall_fit(model, user),
        Comparison::Closeness => closeness_fit(user, model),
        // Categorical values arrive as 1.0 (match) / 0.0 (miss)
        Comparison::Categorical => categorical_fit(user >= 0.5 && model >= 0.5),
    }
}

/// One attribute comparison between a respondent and a business model
#[derive(Debug, Clone, Serialize)]
pub struct AttributeFit {
    pub attribute: Attribute,
    /// Normalized user value (0..1)
    pub user_value: f64,
    /// Normalized model value (0..1)
    pub model_value: f64,
    /// Fit (0..1)
    pub fit: f64,
    /// Effective weight after catalog overrides
    pub weight: f64,
}

impl AttributeFit {
    pub fn new(attribute: Attribute, user_value: f64, model_value: f64, weight: f64) -> Self {
        let fit = compare(attribute.comparison(), user_value, model_value);
        Self { attribute, user_value, model_value, fit, weight }
    }

    /// Weighted shortfall, used to rank which gaps to talk about first
    pub fn weighted_gap(&self) -> f64 {
        (1.0 - self.fit) * self.weight
    }
}

/// Weighted mean fit (0..1). Zero total weight yields 0.
pub fn weighted_fit(fits: &[AttributeFit]) -> f64 {
    let total_weight: f64 = fits.iter().map(|f| f.weight).sum();
    if total_weight <= 0.0 {
        return 0.0;
    }
    fits.iter().map(|f| f.fit * f.weight).sum::<f64>() / total_weight
}
