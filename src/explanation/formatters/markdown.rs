use crate::explanation::types::{Explanation, MetricCard, ResultsReport};

/// Markdown formatter for explanations and results reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format explanation as markdown
    pub fn format(explanation: &Explanation) -> String {
        let mut md = String::with_capacity(2048);
        Self::write_explanation(&mut md, explanation, "#");
        md
    }

    /// Format the full results report (ranked table plus leading explanations)
    pub fn format_report(report: &ResultsReport) -> String {
        let mut md = String::with_capacity(8192);

        md.push_str("# Your Business Model Matches\n\n");
        md.push_str(&format!(
            "*Generated {}*\n\n",
            report.generated_at.format("%Y-%m-%d %H:%M UTC")
        ));

        md.push_str("## Ranking\n\n");
        md.push_str("| Rank | Business Model | Score | Fit |\n");
        md.push_str("|------|----------------|-------|-----|\n");
        for (i, m) in report.matches.iter().enumerate() {
            md.push_str(&format!(
                "| {} | {} | {:.1} | {} |\n",
                i + 1,
                m.name,
                m.score,
                m.fit_category.label()
            ));
        }
        md.push('\n');

        if !report.explanations.is_empty() {
            md.push_str("## Top Matches in Detail\n\n");
            for explanation in &report.explanations {
                Self::write_explanation(&mut md, explanation, "###");
            }
        }

        md
    }

    fn write_explanation(md: &mut String, explanation: &Explanation, heading: &str) {
        // Title with stars and score
        md.push_str(&format!(
            "{} {} {} - {}\n\n",
            heading, explanation.model_name, explanation.overall.stars, explanation.overall.label
        ));
        md.push_str(&format!(
            "**Overall Score:** {:.1}/100\n\n",
            explanation.overall.score
        ));
        md.push_str(&format!("{}\n\n", explanation.description));

        if !explanation.strengths.is_empty() {
            md.push_str(&format!("{}# Strengths\n\n", heading));
            for strength in &explanation.strengths {
                md.push_str(&format!("**{}** [{}]  \n", strength.title, strength.metric_code));
                md.push_str(&format!("{}  \n", strength.message));
                md.push_str(&format!("{}\n\n", strength.detail));
            }
        }

        if !explanation.warnings.is_empty() {
            md.push_str(&format!("{}# Watch Out For\n\n", heading));
            for warning in &explanation.warnings {
                md.push_str(&format!("{} **{}** [{}]  \n", warning.icon, warning.message, warning.metric_code));
                md.push_str(&format!("{}  \n", warning.detail));
                md.push_str(&format!("*Advice:* {}\n\n", warning.advice));
            }
        }

        if !explanation.risks.is_empty() {
            md.push_str(&format!("{}# Risks\n\n", heading));
            for risk in &explanation.risks {
                md.push_str(&format!("{} **{}** [{}]  \n", risk.icon, risk.title, risk.metric_code));
                md.push_str(&format!("{}  \n", risk.message));
                md.push_str(&format!("{}  \n", risk.detail));
                md.push_str(&format!("*Advice:* {}\n\n", risk.advice));
            }
        }

        md.push_str(&format!("{}# Dimension Breakdown\n\n", heading));
        md.push_str("| Dimension | Score | Interpretation |\n");
        md.push_str("|-----------|-------|----------------|\n");
        Self::write_metric_rows(md, &explanation.metrics_display.foundations);
        Self::write_metric_rows(md, &explanation.metrics_display.fit);
        md.push('\n');
    }

    fn write_metric_rows(md: &mut String, cards: &[MetricCard]) {
        for metric in cards {
            md.push_str(&format!(
                "| {} - {} | {:.1} | {} |\n",
                metric.code, metric.name, metric.score, metric.interpretation
            ));
        }
    }
}
