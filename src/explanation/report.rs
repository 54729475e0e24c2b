//! Full results report: every ranked match plus explanations for the leaders

use chrono::Utc;

use crate::error::Result;
use crate::explanation::generator::ExplanationGenerator;
use crate::explanation::types::ResultsReport;
use crate::quiz::QuizData;
use crate::scorer::{BusinessModelScorer, ModelScore};

/// Build a report from an already ranked match list
///
/// Explanations are generated for the first `explain_top` matches.
pub fn build_report(
    scorer: &BusinessModelScorer,
    quiz: &QuizData,
    matches: Vec<ModelScore>,
    explain_top: usize,
) -> Result<ResultsReport> {
    let explanations = matches
        .iter()
        .take(explain_top)
        .map(|m| ExplanationGenerator::explain(scorer, quiz, &m.model_id))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        "Built results report: {} matches, {} explanations",
        matches.len(),
        explanations.len()
    );

    Ok(ResultsReport {
        generated_at: Utc::now(),
        matches,
        explanations,
    })
}
