//! METRIC 5: WORK STYLE FIT
//!
//! Preferred structure and collaboration (closeness) plus the drive the model
//! asks for: self-motivation, long-term consistency and comfort with trial
//! and error (capacity).

use crate::catalog::BusinessModel;
use crate::quiz::QuizData;
use crate::utils::fit::{weighted_fit, AttributeFit};
use crate::utils::normalization::rating_normalize;
use super::m3_skill_fit::gaps_by_weight;
use super::Attribute;

/// Closeness below this is reported as a mismatch (two or more steps apart)
const MISMATCH_THRESHOLD: f64 = 0.5;

/// Result of M5 calculation
#[derive(Debug, Clone)]
pub struct M5Result {
    /// Weighted fit (0..1)
    pub raw: f64,
    /// Display score (0-100, HIGH = GOOD)
    pub norm: f64,
    pub fits: Vec<AttributeFit>,
    pub structure_mismatch: bool,
    pub collaboration_mismatch: bool,
    /// Drive shortfalls, largest weighted gap first
    pub drive_gaps: Vec<Attribute>,
}

/// Calculate M5: Work Style Fit
pub fn calculate_m5(quiz: &QuizData, model: &BusinessModel) -> M5Result {
    let fits = vec![
        AttributeFit::new(
            Attribute::WorkStructure,
            quiz.work_structure_preference.ordinal(),
            model.structure.ordinal(),
            model.weight_for(Attribute::WorkStructure),
        ),
        AttributeFit::new(
            Attribute::Collaboration,
            quiz.work_collaboration_preference.ordinal(),
            model.collaboration.ordinal(),
            model.weight_for(Attribute::Collaboration),
        ),
        AttributeFit::new(
            Attribute::SelfMotivation,
            rating_normalize(quiz.self_motivation_level),
            rating_normalize(model.autonomy),
            model.weight_for(Attribute::SelfMotivation),
        ),
        AttributeFit::new(
            Attribute::Consistency,
            rating_normalize(quiz.long_term_consistency),
            rating_normalize(model.consistency),
            model.weight_for(Attribute::Consistency),
        ),
        AttributeFit::new(
            Attribute::TrialAndError,
            rating_normalize(quiz.trial_error_comfort),
            rating_normalize(model.experimentation),
            model.weight_for(Attribute::TrialAndError),
        ),
    ];

    let structure_mismatch = fits[0].fit < MISMATCH_THRESHOLD;
    let collaboration_mismatch = fits[1].fit < MISMATCH_THRESHOLD;
    let drive_gaps = gaps_by_weight(&fits[2..]);
    let raw = weighted_fit(&fits);

    M5Result {
        raw,
        norm: raw * 100.0,
        fits,
        structure_mismatch,
        collaboration_mismatch,
        drive_gaps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::quiz::fixtures::balanced_quiz;
    use crate::quiz::{Collaboration, WorkStructure};

    #[test]
    fn test_structure_seeker_vs_freeform_model() {
        let catalog = Catalog::builtin().unwrap();
        // Content creation: full freedom, mostly solo
        let content = catalog.get("content-creation").unwrap();

        let mut quiz = balanced_quiz();
        quiz.work_structure_preference = WorkStructure::ClearSteps;
        quiz.work_collaboration_preference = Collaboration::MostlySolo;

        let m5 = calculate_m5(&quiz, content);
        assert!(m5.structure_mismatch);
        assert!(!m5.collaboration_mismatch);
    }

    #[test]
    fn test_one_step_apart_is_not_a_mismatch() {
        let catalog = Catalog::builtin().unwrap();
        // Freelancing: some structure, mostly solo
        let freelancing = catalog.get("freelancing").unwrap();

        let mut quiz = balanced_quiz();
        quiz.work_structure_preference = WorkStructure::MostlyFlexible;
        quiz.work_collaboration_preference = Collaboration::SoloOnly;

        let m5 = calculate_m5(&quiz, freelancing);
        assert!(!m5.structure_mismatch);
        assert!(!m5.collaboration_mismatch);
    }

    #[test]
    fn test_drive_gaps_ordered_by_weight() {
        let catalog = Catalog::builtin().unwrap();
        // SaaS: autonomy 5, consistency 5, experimentation 5
        let saas = catalog.get("saas-development").unwrap();

        let mut quiz = balanced_quiz();
        quiz.self_motivation_level = 1;
        quiz.long_term_consistency = 1;
        quiz.trial_error_comfort = 1;

        let m5 = calculate_m5(&quiz, saas);
        // Equal gaps, so weight decides: 1.0 > 0.75 > 0.5
        assert_eq!(
            m5.drive_gaps,
            vec![Attribute::SelfMotivation, Attribute::Consistency, Attribute::TrialAndError]
        );
    }
}
