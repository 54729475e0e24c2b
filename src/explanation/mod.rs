pub mod types;
pub mod fragments;
pub mod generator;
pub mod report;
pub mod formatters;

pub use types::{
    Explanation, MetricCard, MetricFragment, MetricsDisplay, OverallExplanation, ResultsReport,
    RiskCard, Severity, StrengthCard, WarningCard,
};

pub use fragments::{
    generate_m1_fragment, generate_m2_fragment, generate_m3_fragment, generate_m4_fragment,
    generate_m5_fragment, generate_m6_fragment,
};

pub use generator::ExplanationGenerator;
pub use report::build_report;
pub use formatters::{JsonFormatter, MarkdownFormatter};
