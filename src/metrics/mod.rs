//! Metric modules for business-model scoring
//!
//! Eighteen attribute comparisons grouped into six dimensions, one module per
//! dimension. Each module compares a quiz against one business model and
//! returns its weighted fit plus the details the explanation layer needs.

pub mod m1_income_fit;
pub mod m2_resource_fit;
pub mod m3_skill_fit;
pub mod m4_personality_fit;
pub mod m5_work_style_fit;
pub mod m6_motivation_fit;

// Re-export metric functions
pub use m1_income_fit::{calculate_m1, M1Result};
pub use m2_resource_fit::{calculate_m2, M2Result};
pub use m3_skill_fit::{calculate_m3, M3Result};
pub use m4_personality_fit::{calculate_m4, M4Result};
pub use m5_work_style_fit::{calculate_m5, M5Result};
pub use m6_motivation_fit::{calculate_m6, M6Result};

use serde::{Deserialize, Serialize};
use crate::utils::fit::Comparison;

/// Score groupings reported separately to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Income,
    Resources,
    Skills,
    Personality,
    WorkStyle,
    Motivation,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::Income,
        Dimension::Resources,
        Dimension::Skills,
        Dimension::Personality,
        Dimension::WorkStyle,
        Dimension::Motivation,
    ];

    /// "M1".."M6"
    pub fn code(&self) -> &'static str {
        match self {
            Dimension::Income => "M1",
            Dimension::Resources => "M2",
            Dimension::Skills => "M3",
            Dimension::Personality => "M4",
            Dimension::WorkStyle => "M5",
            Dimension::Motivation => "M6",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Dimension::Income => "Income Goals",
            Dimension::Resources => "Time & Budget",
            Dimension::Skills => "Skills",
            Dimension::Personality => "Personality",
            Dimension::WorkStyle => "Work Style",
            Dimension::Motivation => "Motivation",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Dimension::Income => 0,
            Dimension::Resources => 1,
            Dimension::Skills => 2,
            Dimension::Personality => 3,
            Dimension::WorkStyle => 4,
            Dimension::Motivation => 5,
        }
    }
}

/// A single quiz-vs-model comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    IncomeGoal,
    FirstIncomeTimeline,
    StartupBudget,
    WeeklyHours,
    TechSkills,
    ToolLearning,
    Organization,
    RiskTolerance,
    DirectSelling,
    BrandFace,
    Creativity,
    WorkStructure,
    Collaboration,
    SelfMotivation,
    Consistency,
    TrialAndError,
    MainMotivation,
    LearningStyle,
}

impl Attribute {
    pub const ALL: [Attribute; 18] = [
        Attribute::IncomeGoal,
        Attribute::FirstIncomeTimeline,
        Attribute::StartupBudget,
        Attribute::WeeklyHours,
        Attribute::TechSkills,
        Attribute::ToolLearning,
        Attribute::Organization,
        Attribute::RiskTolerance,
        Attribute::DirectSelling,
        Attribute::BrandFace,
        Attribute::Creativity,
        Attribute::WorkStructure,
        Attribute::Collaboration,
        Attribute::SelfMotivation,
        Attribute::Consistency,
        Attribute::TrialAndError,
        Attribute::MainMotivation,
        Attribute::LearningStyle,
    ];

    pub fn dimension(&self) -> Dimension {
        match self {
            Attribute::IncomeGoal | Attribute::FirstIncomeTimeline => Dimension::Income,
            Attribute::StartupBudget | Attribute::WeeklyHours => Dimension::Resources,
            Attribute::TechSkills | Attribute::ToolLearning | Attribute::Organization => Dimension::Skills,
            Attribute::RiskTolerance
            | Attribute::DirectSelling
            | Attribute::BrandFace
            | Attribute::Creativity => Dimension::Personality,
            Attribute::WorkStructure
            | Attribute::Collaboration
            | Attribute::SelfMotivation
            | Attribute::Consistency
            | Attribute::TrialAndError => Dimension::WorkStyle,
            Attribute::MainMotivation | Attribute::LearningStyle => Dimension::Motivation,
        }
    }

    pub fn default_weight(&self) -> f64 {
        match self {
            Attribute::IncomeGoal => 1.5,
            Attribute::FirstIncomeTimeline => 1.0,
            Attribute::StartupBudget => 1.25,
            Attribute::WeeklyHours => 1.25,
            Attribute::TechSkills => 1.0,
            Attribute::ToolLearning => 0.5,
            Attribute::Organization => 0.75,
            Attribute::RiskTolerance => 1.0,
            Attribute::DirectSelling => 1.0,
            Attribute::BrandFace => 1.0,
            Attribute::Creativity => 0.75,
            Attribute::WorkStructure => 0.5,
            Attribute::Collaboration => 0.5,
            Attribute::SelfMotivation => 1.0,
            Attribute::Consistency => 0.75,
            Attribute::TrialAndError => 0.5,
            Attribute::MainMotivation => 0.75,
            Attribute::LearningStyle => 0.25,
        }
    }

    pub fn comparison(&self) -> Comparison {
        match self {
            Attribute::IncomeGoal => Comparison::Ceiling,
            Attribute::Creativity | Attribute::WorkStructure | Attribute::Collaboration => {
                Comparison::Closeness
            }
            Attribute::MainMotivation | Attribute::LearningStyle => Comparison::Categorical,
            _ => Comparison::Capacity,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Attribute::IncomeGoal => "Income goal",
            Attribute::FirstIncomeTimeline => "Time to first income",
            Attribute::StartupBudget => "Startup budget",
            Attribute::WeeklyHours => "Weekly hours",
            Attribute::TechSkills => "Technical skills",
            Attribute::ToolLearning => "Learning new tools",
            Attribute::Organization => "Organization",
            Attribute::RiskTolerance => "Risk tolerance",
            Attribute::DirectSelling => "Direct selling",
            Attribute::BrandFace => "Being the face of the brand",
            Attribute::Creativity => "Creative work",
            Attribute::WorkStructure => "Work structure",
            Attribute::Collaboration => "Collaboration",
            Attribute::SelfMotivation => "Self-motivation",
            Attribute::Consistency => "Long-term consistency",
            Attribute::TrialAndError => "Trial and error",
            Attribute::MainMotivation => "Main motivation",
            Attribute::LearningStyle => "Learning style",
        }
    }
}
