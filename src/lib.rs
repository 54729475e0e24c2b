//! Business Model Scorer
//!
//! Ranks a fixed catalog of business models against one completed quiz.
//!
//! Layout:
//! - `quiz`: Questionnaire answers and validation
//! - `catalog`: Business model definitions (built-in JSON or a file)
//! - `utils/`: Band normalization and comparison rules
//! - `metrics/`: One module per scoring dimension (M1-M6)
//! - `scorer`: Overall score, ranking (sequential and Rayon)
//! - `explanation/`: Strength/warning/risk cards, Markdown and JSON output
//! - `store`: Quiz attempts and report unlocks, in memory
//! - `api_server`: Axum HTTP surface (feature `api`)

pub mod error;
pub mod config;
pub mod quiz;
pub mod catalog;
pub mod utils;
pub mod metrics;
pub mod scorer;
pub mod explanation;
pub mod store;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use error::{Result, ScoringError};
pub use config::ServerConfig;
pub use quiz::QuizData;
pub use catalog::{BusinessModel, Catalog};
pub use metrics::{Attribute, Dimension};
pub use scorer::{BusinessModelScorer, FitCategory, ModelScore};
pub use explanation::{Explanation, ExplanationGenerator, JsonFormatter, MarkdownFormatter};
pub use store::{AttemptStore, QuizAttempt, ReportAccess, ReportType};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
