use crate::explanation::types::{Explanation, ResultsReport};

/// JSON formatter for explanations
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format explanation as pretty-printed JSON
    pub fn format(explanation: &Explanation) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(explanation)
    }

    /// Format explanation as compact JSON (no whitespace)
    pub fn format_compact(explanation: &Explanation) -> Result<String, serde_json::Error> {
        serde_json::to_string(explanation)
    }

    /// Format explanation as a JSON value (for API responses and caching)
    pub fn to_value(explanation: &Explanation) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(explanation)
    }

    /// Format a full results report as pretty-printed JSON
    pub fn format_report(report: &ResultsReport) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(report)
    }
}
