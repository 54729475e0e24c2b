use crate::catalog::BusinessModel;
use crate::error::{Result, ScoringError};
use crate::explanation::types::*;
use crate::metrics::Dimension;
use crate::quiz::QuizData;
use crate::scorer::{BusinessModelScorer, FitCategory, MetricResults, ModelScore};

/// Main explanation generator
pub struct ExplanationGenerator;

impl ExplanationGenerator {
    /// Generate complete explanation from a ModelScore and its fragments
    ///
    /// Takes:
    /// - model_score: Computed scores
    /// - model: The catalog entry that was scored
    /// - results: Per-metric results (for the attribute breakdown)
    /// - fragments: Pre-generated metric fragments, one per dimension
    pub fn generate(
        model_score: &ModelScore,
        model: &BusinessModel,
        results: &MetricResults,
        fragments: Vec<MetricFragment>,
    ) -> Explanation {
        let overall = Self::generate_overall(model_score.score, &model.name);

        let mut strengths = Vec::new();
        let mut warnings = Vec::new();
        let mut risks = Vec::new();

        for fragment in fragments {
            if let Some(strength) = fragment.strength {
                strengths.push(strength);
            }
            if let Some(warning) = fragment.warning {
                warnings.push(warning);
            }
            if let Some(risk) = fragment.risk {
                risks.push(risk);
            }
        }

        let metrics_display = Self::format_metrics_display(model_score);

        Explanation {
            model_id: model.id.clone(),
            model_name: model.name.clone(),
            description: model.description.clone(),
            overall,
            strengths,
            warnings,
            risks,
            metrics_display,
            attribute_fits: results.all_fits(),
        }
    }

    /// Score one model and explain it in a single call
    pub fn explain(scorer: &BusinessModelScorer, quiz: &QuizData, model_id: &str) -> Result<Explanation> {
        let (model_score, results, fragments) = scorer.score_model_with_explanation(quiz, model_id)?;
        let model = scorer
            .catalog()
            .get(model_id)
            .ok_or_else(|| ScoringError::UnknownModel(model_id.to_string()))?;

        Ok(Self::generate(&model_score, model, &results, fragments))
    }

    /// Generate overall score interpretation with stars and fit label
    fn generate_overall(score: f64, model_name: &str) -> OverallExplanation {
        let stars = match score {
            s if s >= 85.0 => "★★★★★",
            s if s >= 70.0 => "★★★★☆",
            s if s >= 50.0 => "★★★☆☆",
            s if s >= 30.0 => "★★☆☆☆",
            s if s >= 15.0 => "★☆☆☆☆",
            _ => "☆☆☆☆☆",
        };
        let fit_category = FitCategory::from_score(score);

        OverallExplanation {
            score,
            stars: stars.to_string(),
            fit_category,
            label: fit_category.label().to_string(),
            message: format!("{} match for {}: {:.1}/100", fit_category.label(), model_name, score),
        }
    }

    /// Format metrics display (foundations vs fit)
    fn format_metrics_display(model_score: &ModelScore) -> MetricsDisplay {
        let mut foundations = Vec::new();
        let mut fit = Vec::new();

        for dimension in Dimension::ALL {
            let score = model_score.dimensions[dimension.index()];
            let interpretation = match score {
                s if s >= 80.0 => "Excellent",
                s if s >= 60.0 => "Good",
                s if s >= 40.0 => "Fair",
                _ => "Poor",
            };

            let card = MetricCard {
                code: dimension.code().to_string(),
                name: dimension.display_name().to_string(),
                score,
                interpretation: interpretation.to_string(),
            };

            if dimension.index() < 3 {
                foundations.push(card);
            } else {
                fit.push(card);
            }
        }

        MetricsDisplay { foundations, fit }
    }
}
