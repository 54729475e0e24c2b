use serde::{Deserialize, Serialize};
use crate::scorer::{FitCategory, ModelScore};
use crate::utils::fit::AttributeFit;

/// Complete explanation of one business model match
#[derive(Debug, Clone, Serialize)]
pub struct Explanation {
    pub model_id: String,
    pub model_name: String,
    pub description: String,
    pub overall: OverallExplanation,
    pub strengths: Vec<StrengthCard>,
    pub warnings: Vec<WarningCard>,
    pub risks: Vec<RiskCard>,
    pub metrics_display: MetricsDisplay,
    /// Every attribute comparison behind the score
    pub attribute_fits: Vec<AttributeFit>,
}

/// Overall score interpretation with stars
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallExplanation {
    pub score: f64,
    pub stars: String,  // "★★★★☆"
    pub fit_category: FitCategory,
    pub label: String,  // "Best Fit" / "Strong Fit" / ...
    pub message: String,
}

/// Strength card for dimensions where the respondent fits well
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthCard {
    pub strength_type: String, // "income_fit", "resource_fit", etc.
    pub metric_code: String,   // "M1", "M2", etc.
    pub title: String,
    pub message: String,
    pub detail: String,
}

/// Warning card for moderate gaps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarningCard {
    pub warning_type: String, // "budget_gap", "style_mismatch", ...
    pub metric_code: String,
    pub severity: Severity,
    pub icon: String, // "⚠️", "⚡"
    pub message: String,
    pub detail: String,
    pub advice: String,
}

/// Risk card for severe gaps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskCard {
    pub risk_type: String, // "income_shortfall", "skill_gap", ...
    pub metric_code: String,
    pub severity: Severity,
    pub icon: String,
    pub title: String,
    pub message: String,
    pub detail: String,
    pub advice: String,
}

/// Severity level for warnings and risks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    None,
    Info,
    Low,
    Medium,
    High,
}

impl Severity {
    /// Derive severity from a display score (0-100)
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 80.0 => Severity::None,
            s if s >= 60.0 => Severity::Low,
            s if s >= 40.0 => Severity::Medium,
            _ => Severity::High,
        }
    }
}

/// Metrics display grouped by category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsDisplay {
    pub foundations: Vec<MetricCard>, // M1, M2, M3
    pub fit: Vec<MetricCard>,         // M4, M5, M6
}

/// Individual metric card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricCard {
    pub code: String,              // "M1"
    pub name: String,              // "Income Goals"
    pub score: f64,                // Display score (0-100)
    pub interpretation: String,    // "Excellent" / "Good" / "Fair" / "Poor"
}

/// Ranked results plus explanations for the leading models
#[derive(Debug, Clone, Serialize)]
pub struct ResultsReport {
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub matches: Vec<ModelScore>,
    pub explanations: Vec<Explanation>,
}

/// Fragment of explanation from a single metric
#[derive(Debug, Clone)]
pub struct MetricFragment {
    pub strength: Option<StrengthCard>,
    pub warning: Option<WarningCard>,
    pub risk: Option<RiskCard>,
}

impl MetricFragment {
    /// Create an empty fragment
    pub fn empty() -> Self {
        Self {
            strength: None,
            warning: None,
            risk: None,
        }
    }

    /// Create a fragment with only a strength
    pub fn with_strength(strength: StrengthCard) -> Self {
        Self {
            strength: Some(strength),
            warning: None,
            risk: None,
        }
    }

    /// Create a fragment with only a warning
    pub fn with_warning(warning: WarningCard) -> Self {
        Self {
            strength: None,
            warning: Some(warning),
            risk: None,
        }
    }

    /// Create a fragment with only a risk
    pub fn with_risk(risk: RiskCard) -> Self {
        Self {
            strength: None,
            warning: None,
            risk: Some(risk),
        }
    }
}

/// Score bands shared by the fragment generators
pub(crate) const STRENGTH_THRESHOLD: f64 = 75.0;
pub(crate) const RISK_THRESHOLD: f64 = 45.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_from_score() {
        assert_eq!(Severity::from_score(90.0), Severity::None);
        assert_eq!(Severity::from_score(65.0), Severity::Low);
        assert_eq!(Severity::from_score(45.0), Severity::Medium);
        assert_eq!(Severity::from_score(10.0), Severity::High);
    }

    #[test]
    fn test_fragment_constructors() {
        assert!(MetricFragment::empty().strength.is_none());
        let fragment = MetricFragment::with_risk(RiskCard {
            risk_type: "skill_gap".to_string(),
            metric_code: "M3".to_string(),
            severity: Severity::High,
            icon: "🚨".to_string(),
            title: "Skills".to_string(),
            message: String::new(),
            detail: String::new(),
            advice: String::new(),
        });
        assert!(fragment.risk.is_some());
        assert!(fragment.warning.is_none());
    }
}
