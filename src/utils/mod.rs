//! Utility modules for business-model scoring
//!
//! Contains shared functionality used across multiple metrics:
//! - Normalization: Band interpolation of dollar and hour amounts
//! - Fit: Comparison rules and weighted aggregation

pub mod normalization;
pub mod fit;

// Re-export commonly used types
pub use normalization::{band_normalize, normalize_hours, normalize_income, normalize_investment, rating_normalize};
pub use fit::{compare, weighted_fit, AttributeFit, Comparison};
