//! Quiz answers
//!
//! One completed questionnaire. Enums are shared with the catalog so that both
//! sides of every attribute comparison speak the same scale.

use serde::{Deserialize, Serialize};
use crate::error::{Result, ScoringError};

/// Primary reason the user wants to start a business
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MainMotivation {
    FinancialFreedom,
    Flexibility,
    CreativeExpression,
    Impact,
    Security,
    PersonalGrowth,
}

impl MainMotivation {
    pub fn display_name(&self) -> &'static str {
        match self {
            MainMotivation::FinancialFreedom => "financial freedom",
            MainMotivation::Flexibility => "flexibility",
            MainMotivation::CreativeExpression => "creative expression",
            MainMotivation::Impact => "making an impact",
            MainMotivation::Security => "security",
            MainMotivation::PersonalGrowth => "personal growth",
        }
    }
}

/// Time until first income. For the user this is how long they can wait,
/// for a business model how long it typically takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeTimeline {
    UnderOneMonth,
    OneToTwoMonths,
    ThreeToSixMonths,
    NoRush,
}

impl IncomeTimeline {
    /// Position on a 0..1 scale (0 = fastest)
    pub fn ordinal(&self) -> f64 {
        match self {
            IncomeTimeline::UnderOneMonth => 0.0,
            IncomeTimeline::OneToTwoMonths => 1.0 / 3.0,
            IncomeTimeline::ThreeToSixMonths => 2.0 / 3.0,
            IncomeTimeline::NoRush => 1.0,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            IncomeTimeline::UnderOneMonth => "under 1 month",
            IncomeTimeline::OneToTwoMonths => "1-2 months",
            IncomeTimeline::ThreeToSixMonths => "3-6 months",
            IncomeTimeline::NoRush => "6+ months",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolLearningWillingness {
    No,
    Unsure,
    Yes,
}

impl ToolLearningWillingness {
    /// Equivalent 1-5 rating
    pub fn as_rating(&self) -> u8 {
        match self {
            ToolLearningWillingness::No => 1,
            ToolLearningWillingness::Unsure => 3,
            ToolLearningWillingness::Yes => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkStructure {
    ClearSteps,
    SomeStructure,
    MostlyFlexible,
    FullFreedom,
}

impl WorkStructure {
    /// Position on a 0..1 scale (0 = most structured)
    pub fn ordinal(&self) -> f64 {
        match self {
            WorkStructure::ClearSteps => 0.0,
            WorkStructure::SomeStructure => 1.0 / 3.0,
            WorkStructure::MostlyFlexible => 2.0 / 3.0,
            WorkStructure::FullFreedom => 1.0,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WorkStructure::ClearSteps => "clear step-by-step work",
            WorkStructure::SomeStructure => "some structure",
            WorkStructure::MostlyFlexible => "mostly flexible work",
            WorkStructure::FullFreedom => "complete freedom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collaboration {
    SoloOnly,
    MostlySolo,
    Balanced,
    TeamFocused,
}

impl Collaboration {
    /// Position on a 0..1 scale (0 = fully solo)
    pub fn ordinal(&self) -> f64 {
        match self {
            Collaboration::SoloOnly => 0.0,
            Collaboration::MostlySolo => 1.0 / 3.0,
            Collaboration::Balanced => 2.0 / 3.0,
            Collaboration::TeamFocused => 1.0,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Collaboration::SoloOnly => "working alone",
            Collaboration::MostlySolo => "mostly solo work",
            Collaboration::Balanced => "a mix of solo and team work",
            Collaboration::TeamFocused => "working with a team",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningPreference {
    HandsOn,
    Video,
    Reading,
    Mentorship,
}

impl LearningPreference {
    pub fn display_name(&self) -> &'static str {
        match self {
            LearningPreference::HandsOn => "learning by doing",
            LearningPreference::Video => "video courses",
            LearningPreference::Reading => "reading",
            LearningPreference::Mentorship => "mentorship",
        }
    }
}

/// A completed questionnaire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizData {
    pub main_motivation: MainMotivation,
    /// USD per month that would count as success
    pub success_income_goal: u32,
    pub first_income_timeline: IncomeTimeline,
    /// USD available to start
    pub upfront_investment: u32,
    /// Hours per week
    pub weekly_time_commitment: u32,
    pub tech_skills_rating: u8,
    pub tool_learning_willingness: ToolLearningWillingness,
    pub organization_level: u8,
    pub risk_comfort_level: u8,
    pub direct_selling_comfort: u8,
    pub brand_face_comfort: u8,
    pub creative_work_enjoyment: u8,
    pub work_structure_preference: WorkStructure,
    pub work_collaboration_preference: Collaboration,
    pub self_motivation_level: u8,
    pub long_term_consistency: u8,
    pub trial_error_comfort: u8,
    pub learning_preference: LearningPreference,
}

const HOURS_PER_WEEK: u32 = 168;

impl QuizData {
    /// Check every rating is on the 1-5 scale and hours are physically possible
    pub fn validate(&self) -> Result<()> {
        let ratings: [(&'static str, u8); 9] = [
            ("techSkillsRating", self.tech_skills_rating),
            ("organizationLevel", self.organization_level),
            ("riskComfortLevel", self.risk_comfort_level),
            ("directSellingComfort", self.direct_selling_comfort),
            ("brandFaceComfort", self.brand_face_comfort),
            ("creativeWorkEnjoyment", self.creative_work_enjoyment),
            ("selfMotivationLevel", self.self_motivation_level),
            ("longTermConsistency", self.long_term_consistency),
            ("trialErrorComfort", self.trial_error_comfort),
        ];

        for (field, value) in ratings {
            if !(1..=5).contains(&value) {
                return Err(ScoringError::invalid(
                    field,
                    format!("rating must be between 1 and 5, got {}", value),
                ));
            }
        }

        if self.weekly_time_commitment > HOURS_PER_WEEK {
            return Err(ScoringError::invalid(
                "weeklyTimeCommitment",
                format!("{} hours exceeds the {} hours in a week", self.weekly_time_commitment, HOURS_PER_WEEK),
            ));
        }

        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use super::fixtures::balanced_quiz;

    #[test]
    fn test_validate_accepts_complete_quiz() {
        assert!(balanced_quiz().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_rating() {
        let mut quiz = balanced_quiz();
        quiz.risk_comfort_level = 6;
        match quiz.validate() {
            Err(ScoringError::InvalidAnswer { field, .. }) => assert_eq!(field, "riskComfortLevel"),
            other => panic!("expected InvalidAnswer, got {:?}", other),
        }

        let mut quiz = balanced_quiz();
        quiz.tech_skills_rating = 0;
        assert!(quiz.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_impossible_hours() {
        let mut quiz = balanced_quiz();
        quiz.weekly_time_commitment = 200;
        assert!(quiz.validate().is_err());
    }

    #[test]
    fn test_quiz_deserializes_from_camel_case() {
        let json = r#"{
            "mainMotivation": "financial_freedom",
            "successIncomeGoal": 10000,
            "firstIncomeTimeline": "one_to_two_months",
            "upfrontInvestment": 0,
            "weeklyTimeCommitment": 10,
            "techSkillsRating": 2,
            "toolLearningWillingness": "unsure",
            "organizationLevel": 4,
            "riskComfortLevel": 1,
            "directSellingComfort": 5,
            "brandFaceComfort": 2,
            "creativeWorkEnjoyment": 1,
            "workStructurePreference": "clear_steps",
            "workCollaborationPreference": "team_focused",
            "selfMotivationLevel": 3,
            "longTermConsistency": 3,
            "trialErrorComfort": 2,
            "learningPreference": "mentorship"
        }"#;

        let quiz: QuizData = serde_json::from_str(json).unwrap();
        assert_eq!(quiz.main_motivation, MainMotivation::FinancialFreedom);
        assert_eq!(quiz.first_income_timeline, IncomeTimeline::OneToTwoMonths);
        assert_eq!(quiz.tool_learning_willingness.as_rating(), 3);
        assert_eq!(quiz.work_collaboration_preference, Collaboration::TeamFocused);
    }

    #[test]
    fn test_timeline_ordering() {
        assert!(IncomeTimeline::UnderOneMonth < IncomeTimeline::NoRush);
        assert_eq!(IncomeTimeline::NoRush.ordinal(), 1.0);
    }
}
