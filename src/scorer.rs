//! Business Model Scorer - Main coordinator for ranking business models
//!
//! Runs all 6 metrics for every catalog model and ranks the results.
//! Includes both sequential and parallel (Rayon) implementations.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::catalog::{BusinessModel, Catalog, ModelCategory};
use crate::error::{Result, ScoringError};
use crate::explanation::{
    generate_m1_fragment, generate_m2_fragment, generate_m3_fragment, generate_m4_fragment,
    generate_m5_fragment, generate_m6_fragment, MetricFragment,
};
use crate::metrics::*;
use crate::quiz::QuizData;
use crate::utils::fit::{weighted_fit, AttributeFit};

/// Banded label of an overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitCategory {
    BestFit,
    StrongFit,
    PossibleFit,
    PoorFit,
}

impl FitCategory {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 70.0 => FitCategory::BestFit,
            s if s >= 50.0 => FitCategory::StrongFit,
            s if s >= 30.0 => FitCategory::PossibleFit,
            _ => FitCategory::PoorFit,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FitCategory::BestFit => "Best Fit",
            FitCategory::StrongFit => "Strong Fit",
            FitCategory::PossibleFit => "Possible Fit",
            FitCategory::PoorFit => "Poor Fit",
        }
    }
}

/// Score of one business model against one quiz
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelScore {
    pub model_id: String,
    pub name: String,
    pub category: ModelCategory,
    /// Overall weighted score (0-100)
    pub score: f64,
    pub fit_category: FitCategory,
    /// Display scores for M1-M6 (0-100)
    pub dimensions: [f64; 6],
}

/// All six metric results for one quiz/model pair
#[derive(Debug, Clone)]
pub struct MetricResults {
    pub m1: M1Result,
    pub m2: M2Result,
    pub m3: M3Result,
    pub m4: M4Result,
    pub m5: M5Result,
    pub m6: M6Result,
}

impl MetricResults {
    pub fn compute(quiz: &QuizData, model: &BusinessModel) -> Self {
        Self {
            m1: calculate_m1(quiz, model),
            m2: calculate_m2(quiz, model),
            m3: calculate_m3(quiz, model),
            m4: calculate_m4(quiz, model),
            m5: calculate_m5(quiz, model),
            m6: calculate_m6(quiz, model),
        }
    }

    /// Every attribute comparison, in dimension order
    pub fn all_fits(&self) -> Vec<AttributeFit> {
        [
            &self.m1.fits,
            &self.m2.fits,
            &self.m3.fits,
            &self.m4.fits,
            &self.m5.fits,
            &self.m6.fits,
        ]
        .into_iter()
        .flatten()
        .cloned()
        .collect()
    }

    pub fn dimension_scores(&self) -> [f64; 6] {
        [
            self.m1.norm,
            self.m2.norm,
            self.m3.norm,
            self.m4.norm,
            self.m5.norm,
            self.m6.norm,
        ]
    }

    /// Overall score: weighted mean over all attributes, not a mean of dimensions
    pub fn overall_score(&self) -> f64 {
        (weighted_fit(&self.all_fits()) * 100.0).clamp(0.0, 100.0)
    }
}

/// Main business-model scorer
pub struct BusinessModelScorer {
    catalog: Catalog,
}

impl BusinessModelScorer {
    pub fn new(catalog: Catalog) -> Self {
        tracing::info!("Business model scorer initialized with {} models", catalog.len());
        Self { catalog }
    }

    /// Scorer over the built-in catalog
    pub fn with_builtin_catalog() -> Result<Self> {
        Ok(Self::new(Catalog::builtin()?))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Score a single model (quiz assumed valid)
    pub fn score_model(&self, quiz: &QuizData, model: &BusinessModel) -> ModelScore {
        let results = MetricResults::compute(quiz, model);
        Self::to_model_score(model, &results)
    }

    fn to_model_score(model: &BusinessModel, results: &MetricResults) -> ModelScore {
        let score = results.overall_score();
        tracing::debug!("{}: {:.1}", model.id, score);

        ModelScore {
            model_id: model.id.clone(),
            name: model.name.clone(),
            category: model.category,
            score,
            fit_category: FitCategory::from_score(score),
            dimensions: results.dimension_scores(),
        }
    }

    /// Score every catalog model and rank them
    ///
    /// Sorted by score descending; equal scores keep catalog order.
    pub fn calculate_all_matches(&self, quiz: &QuizData) -> Result<Vec<ModelScore>> {
        quiz.validate()?;

        let mut matches: Vec<ModelScore> = self
            .catalog
            .models()
            .iter()
            .map(|model| self.score_model(quiz, model))
            .collect();

        Self::rank(&mut matches);
        Ok(matches)
    }

    /// Score every catalog model IN PARALLEL and rank them
    ///
    /// Same ranking as `calculate_all_matches`: rayon's collect keeps catalog
    /// order and the sort is stable.
    pub fn calculate_all_matches_parallel(&self, quiz: &QuizData) -> Result<Vec<ModelScore>> {
        quiz.validate()?;

        let mut matches: Vec<ModelScore> = self
            .catalog
            .models()
            .par_iter()
            .map(|model| self.score_model(quiz, model))
            .collect();

        Self::rank(&mut matches);
        Ok(matches)
    }

    /// First `n` of the ranked list
    pub fn top_matches(&self, quiz: &QuizData, n: usize) -> Result<Vec<ModelScore>> {
        let mut matches = self.calculate_all_matches(quiz)?;
        matches.truncate(n);
        Ok(matches)
    }

    /// Score one model and produce its explanation fragments
    pub fn score_model_with_explanation(
        &self,
        quiz: &QuizData,
        model_id: &str,
    ) -> Result<(ModelScore, MetricResults, Vec<MetricFragment>)> {
        quiz.validate()?;

        let model = self
            .catalog
            .get(model_id)
            .ok_or_else(|| ScoringError::UnknownModel(model_id.to_string()))?;

        let results = MetricResults::compute(quiz, model);
        let score = Self::to_model_score(model, &results);
        let d = score.dimensions;

        let fragments = vec![
            generate_m1_fragment(&results.m1, model, d[0]),
            generate_m2_fragment(&results.m2, model, d[1]),
            generate_m3_fragment(&results.m3, model, d[2]),
            generate_m4_fragment(&results.m4, model, d[3]),
            generate_m5_fragment(&results.m5, model, d[4]),
            generate_m6_fragment(&results.m6, model, quiz, d[5]),
        ];

        Ok((score, results, fragments))
    }

    fn rank(matches: &mut [ModelScore]) {
        matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    }
}
