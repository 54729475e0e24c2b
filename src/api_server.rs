// Axum API Server Module
//
// Purpose: REST API for quiz scoring, stored attempts, report access and
// generated explanations. Scoring runs on the blocking pool; generated
// content is cached in moka.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use uuid::Uuid;

use anyhow::Context;

use crate::catalog::Catalog;
use crate::config::ServerConfig;
use crate::error::ScoringError;
use crate::explanation::{build_report, ExplanationGenerator, JsonFormatter, MarkdownFormatter};
use crate::quiz::QuizData;
use crate::scorer::{BusinessModelScorer, FitCategory, ModelScore};
use crate::store::{AttemptStore, ReportType};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub scorer: Arc<BusinessModelScorer>,
    pub store: Arc<AttemptStore>,
    /// Generated explanations and reports, keyed by attempt/content/model/format
    pub cache: Cache<String, serde_json::Value>,
    pub preview_count: usize,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        tracing::info!("Loading business model catalog...");
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path)
                .with_context(|| format!("failed to load catalog from {}", path.display()))?,
            None => Catalog::builtin().context("built-in catalog is invalid")?,
        };

        Ok(Self::from_catalog(catalog, config))
    }

    /// State over an already loaded catalog with an empty attempt store
    pub fn from_catalog(catalog: Catalog, config: &ServerConfig) -> Self {
        tracing::info!("Initializing business model scorer...");
        let scorer = Arc::new(BusinessModelScorer::new(catalog));

        tracing::info!("Initializing Moka cache...");
        let cache = Cache::builder()
            .max_capacity(config.cache_capacity)
            .time_to_live(config.cache_ttl)
            .build();

        Self {
            scorer,
            store: Arc::new(AttemptStore::new()),
            cache,
            preview_count: config.preview_count,
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Catalog
        .route("/api/business-models", get(list_business_models))
        .route("/api/business-models/:id", get(get_business_model))

        // Stateless scoring
        .route("/api/quiz/score", post(score_quiz))

        // Stored attempts and gated content
        .route("/api/quiz-attempts", post(create_attempt))
        .route("/api/quiz-attempts/:id", get(get_attempt))
        .route("/api/quiz-attempts/:id/results", get(get_results))
        .route("/api/quiz-attempts/:id/access", get(get_access))
        .route("/api/quiz-attempts/:id/unlock", post(unlock_report))
        .route(
            "/api/quiz-attempts/:id/models/:model_id/explanation",
            get(get_model_explanation),
        )
        .route("/api/quiz-attempts/:id/report", get(get_report))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "models": state.scorer.catalog().len(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn list_business_models(State(state): State<AppState>) -> impl IntoResponse {
    let models = state.scorer.catalog().models();
    Json(serde_json::json!({
        "count": models.len(),
        "models": models,
    }))
}

async fn get_business_model(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let model = state
        .scorer
        .catalog()
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Business model {} not found", id)))?;

    Ok(Json(serde_json::to_value(model).map_err(ScoringError::from)?))
}

async fn score_quiz(
    State(state): State<AppState>,
    payload: Result<Json<QuizData>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(quiz) = payload?;
    let matches = rank_quiz(&state, quiz).await?;

    Ok(Json(serde_json::json!({
        "count": matches.len(),
        "matches": matches,
    })))
}

async fn create_attempt(
    State(state): State<AppState>,
    payload: Result<Json<CreateAttemptRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let Json(payload) = payload?;
    let matches = rank_quiz(&state, payload.quiz.clone()).await?;
    let attempt = state.store.create_attempt(payload.quiz, payload.email, matches)?;

    let response = serde_json::json!({
        "attempt_id": attempt.id,
        "created_at": attempt.created_at,
        "preview": preview(&attempt.matches, state.preview_count),
    });

    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_attempt(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let attempt = state.store.get_attempt(id)?;
    let access = state.store.access(id)?;

    Ok(Json(serde_json::json!({
        "id": attempt.id,
        "email": attempt.email,
        "quiz": attempt.quiz,
        "created_at": attempt.created_at,
        "access": access,
    })))
}

/// Locked: top `preview_count` with score and category only.
/// Unlocked (`full_report`): every match with dimension scores.
async fn get_results(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let attempt = state.store.get_attempt(id)?;
    let unlocked = state.store.is_unlocked(id, ReportType::FullReport)?;

    let response = if unlocked {
        serde_json::json!({
            "unlocked": true,
            "total_matches": attempt.matches.len(),
            "matches": attempt.matches,
        })
    } else {
        serde_json::json!({
            "unlocked": false,
            "total_matches": attempt.matches.len(),
            "matches": preview(&attempt.matches, state.preview_count),
        })
    };

    Ok(Json(response))
}

async fn get_access(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let access = state.store.access(id)?;
    Ok(Json(serde_json::to_value(access).map_err(ScoringError::from)?))
}

async fn unlock_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<UnlockRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(payload) = payload?;
    let changed = state.store.unlock(id, payload.report_type)?;
    let access = state.store.access(id)?;

    Ok(Json(serde_json::json!({
        "report_type": payload.report_type,
        "changed": changed,
        "access": access,
    })))
}

async fn get_model_explanation(
    State(state): State<AppState>,
    Path((id, model_id)): Path<(Uuid, String)>,
    Query(query): Query<ExplanationQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let attempt = state.store.get_attempt(id)?;
    require_unlocked(&state, id, ReportType::ModelExplanations)?;

    if state.scorer.catalog().get(&model_id).is_none() {
        return Err(AppError::NotFound(format!("Business model {} not found", model_id)));
    }

    let format = query.format.unwrap_or_default();
    let cache_key = format!("{}:explanation:{}:{}", id, model_id, format.as_str());

    if let Some(cached) = state.cache.get(&cache_key).await {
        tracing::debug!("Cache hit for {}", cache_key);
        return Ok(Json(cached));
    }

    tracing::info!("Generating {} explanation of {} for attempt {}", format.as_str(), model_id, id);

    // CPU-bound work: run in blocking thread pool
    let scorer = state.scorer.clone();
    let result = tokio::task::spawn_blocking(move || -> Result<serde_json::Value, ScoringError> {
        let explanation = ExplanationGenerator::explain(&scorer, &attempt.quiz, &model_id)?;
        match format {
            ExplanationFormat::Json => Ok(JsonFormatter::to_value(&explanation)?),
            ExplanationFormat::Markdown => Ok(serde_json::json!({
                "model_id": model_id,
                "format": "markdown",
                "content": MarkdownFormatter::format(&explanation),
            })),
        }
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    state.cache.insert(cache_key, result.clone()).await;

    Ok(Json(result))
}

async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let attempt = state.store.get_attempt(id)?;
    require_unlocked(&state, id, ReportType::FullReport)?;

    let cache_key = format!("{}:report", id);
    if let Some(cached) = state.cache.get(&cache_key).await {
        tracing::debug!("Cache hit for {}", cache_key);
        return Ok(Json(cached));
    }

    tracing::info!("Generating results report for attempt {}", id);

    let scorer = state.scorer.clone();
    let explain_top = state.preview_count;
    let result = tokio::task::spawn_blocking(move || -> Result<serde_json::Value, ScoringError> {
        let report = build_report(&scorer, &attempt.quiz, attempt.matches, explain_top)?;
        Ok(serde_json::json!({
            "attempt_id": id,
            "format": "markdown",
            "content": MarkdownFormatter::format_report(&report),
        }))
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    state.cache.insert(cache_key, result.clone()).await;

    Ok(Json(result))
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Deserialize, Debug)]
pub struct CreateAttemptRequest {
    pub quiz: QuizData,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct UnlockRequest {
    pub report_type: ReportType,
}

#[derive(Deserialize, Debug)]
struct ExplanationQuery {
    format: Option<ExplanationFormat>,
}

#[derive(Deserialize, Debug, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
enum ExplanationFormat {
    #[default]
    Json,
    Markdown,
}

impl ExplanationFormat {
    fn as_str(&self) -> &'static str {
        match self {
            ExplanationFormat::Json => "json",
            ExplanationFormat::Markdown => "markdown",
        }
    }
}

/// Locked view of one match
#[derive(Serialize, Debug)]
struct MatchPreview<'a> {
    model_id: &'a str,
    name: &'a str,
    score: f64,
    fit_category: FitCategory,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Validate and rank on the blocking pool
async fn rank_quiz(state: &AppState, quiz: QuizData) -> Result<Vec<ModelScore>, AppError> {
    let scorer = state.scorer.clone();

    tokio::task::spawn_blocking(move || scorer.calculate_all_matches_parallel(&quiz))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?
        .map_err(AppError::from)
}

fn preview(matches: &[ModelScore], count: usize) -> Vec<MatchPreview<'_>> {
    matches
        .iter()
        .take(count)
        .map(|m| MatchPreview {
            model_id: &m.model_id,
            name: &m.name,
            score: m.score,
            fit_category: m.fit_category,
        })
        .collect()
}

fn require_unlocked(state: &AppState, id: Uuid, report_type: ReportType) -> Result<(), AppError> {
    if state.store.is_unlocked(id, report_type)? {
        Ok(())
    } else {
        tracing::warn!("Locked {:?} requested for attempt {}", report_type, id);
        Err(AppError::PaymentRequired(format!(
            "{:?} is locked for attempt {}",
            report_type, id
        )))
    }
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    PaymentRequired(String),
    Internal(String),
}

impl From<ScoringError> for AppError {
    fn from(err: ScoringError) -> Self {
        match err {
            ScoringError::InvalidAnswer { .. } => {
                tracing::warn!("Rejected quiz: {}", err);
                AppError::BadRequest(err.to_string())
            }
            ScoringError::UnknownModel(_) | ScoringError::AttemptNotFound(_) => {
                AppError::NotFound(err.to_string())
            }
            _ => AppError::Internal(err.to_string()),
        }
    }
}

/// Malformed bodies, out-of-range numbers, missing fields and unknown enum
/// values all fail in the extractor
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::PaymentRequired(msg) => (StatusCode::PAYMENT_REQUIRED, msg),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
