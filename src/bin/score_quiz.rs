//! Score a quiz from a JSON file and print the ranking
//!
//! Usage: score_quiz <quiz.json> [explain_top]
//!
//! Prints every model ranked by score, then the Markdown explanation for the
//! leading `explain_top` models (default 1).

use anyhow::Context;
use bizmodel_scorer::{BusinessModelScorer, ExplanationGenerator, MarkdownFormatter, QuizData};
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .context("usage: score_quiz <quiz.json> [explain_top]")?;
    let explain_top: usize = match args.next() {
        Some(n) => n.parse().with_context(|| format!("explain_top must be a number, got '{}'", n))?,
        None => 1,
    };

    let contents = std::fs::read_to_string(&path).with_context(|| format!("failed to read {}", path))?;
    let quiz: QuizData = serde_json::from_str(&contents).with_context(|| format!("invalid quiz JSON in {}", path))?;

    println!("Initializing Business Model Scorer...\n");
    let scorer = BusinessModelScorer::with_builtin_catalog()?;

    let start = Instant::now();
    let matches = scorer.calculate_all_matches_parallel(&quiz)?;
    let elapsed = start.elapsed();

    println!("{}", "=".repeat(70));
    println!("RANKING ({} models, {:.3} ms)", matches.len(), elapsed.as_secs_f64() * 1000.0);
    println!("{}", "=".repeat(70));
    println!("{:<4} {:<28} {:>7}  {:<13} M1-M6", "#", "Business Model", "Score", "Fit");

    for (i, m) in matches.iter().enumerate() {
        let dims: Vec<String> = m.dimensions.iter().map(|d| format!("{:>3.0}", d)).collect();
        println!(
            "{:<4} {:<28} {:>7.1}  {:<13} {}",
            i + 1,
            m.name,
            m.score,
            m.fit_category.label(),
            dims.join(" ")
        );
    }

    for m in matches.iter().take(explain_top) {
        let explanation = ExplanationGenerator::explain(&scorer, &quiz, &m.model_id)?;
        println!("\n{}", "-".repeat(70));
        println!("{}", MarkdownFormatter::format(&explanation));
    }

    Ok(())
}
