//! HTTP request handlers for the Briefdeck web surface.
//!
//! Implements the upload page, the analysis endpoint, recent-example
//! listing, and a health check using axum.

use axum::{
    extract::{DefaultBodyLimit, Multipart, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use briefdeck_analyzer::{AnalyzeError, Analyzer};
use briefdeck_domain::traits::{ChatProvider, ExampleStore};
use briefdeck_extract::ExtractError;
use briefdeck_store::SqliteStore;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tracing::info;

/// Upload size cap in bytes, enforced both client- and server-side.
pub const MAX_UPLOAD_BYTES: usize = 5_000_000;

/// How many examples `/api/recent` returns when no limit is given.
const DEFAULT_RECENT_LIMIT: usize = 10;

/// Shared application state
pub struct AppState<C>
where
    C: ChatProvider + Send + Sync + 'static,
{
    /// The analysis orchestrator
    pub analyzer: Arc<Analyzer<C, SqliteStore>>,
    /// The example store, shared with the analyzer
    pub store: Arc<Mutex<SqliteStore>>,
}

impl<C> Clone for AppState<C>
where
    C: ChatProvider + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            analyzer: Arc::clone(&self.analyzer),
            store: Arc::clone(&self.store),
        }
    }
}

/// Successful analysis response
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// The reasoning segment (or its placeholder)
    pub reasoning: String,
    /// The task breakdown segment
    pub breakdown: String,
    /// The model's raw reply
    pub raw: String,
    /// Whether the result was persisted for future few-shot use
    pub saved: bool,
}

/// Query parameters for `/api/recent`
#[derive(Debug, Deserialize)]
pub struct RecentParams {
    /// Maximum number of examples to return
    pub limit: Option<usize>,
}

/// One stored example, trimmed for display
#[derive(Debug, Serialize, Deserialize)]
pub struct ExampleSummary {
    /// Opening of the stored brief
    pub brief_excerpt: String,
    /// The stored model reply
    pub breakdown_text: String,
    /// Insertion timestamp (unix seconds)
    pub created_at: i64,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// "ok" when the inference endpoint answers the probe, else "degraded"
    pub status: String,
    /// Whether the inference endpoint is reachable
    pub llm_available: bool,
    /// Number of stored examples
    pub example_count: u64,
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// The request itself was malformed (missing file field, bad multipart)
    BadRequest(String),
    /// The upload exceeds the size cap
    TooLarge(usize),
    /// Document extraction failed
    Extract(ExtractError),
    /// The analysis pipeline failed
    Analyze(AnalyzeError),
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::TooLarge(len) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                format!("upload is {} bytes; the limit is {}", len, MAX_UPLOAD_BYTES),
            ),
            AppError::Extract(e @ ExtractError::UnsupportedType(_)) => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, e.to_string())
            }
            AppError::Extract(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            AppError::Analyze(e) if e.is_unavailable() => {
                (StatusCode::SERVICE_UNAVAILABLE, e.to_string())
            }
            AppError::Analyze(e @ (AnalyzeError::EmptyBrief | AnalyzeError::BriefTooLong(_, _))) => {
                (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
            }
            AppError::Analyze(e) => (StatusCode::BAD_GATEWAY, e.to_string()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

/// GET / - The upload page
async fn index_handler() -> Html<&'static str> {
    Html(include_str!("index.html"))
}

/// POST /api/analyze - Upload a brief and run the full pipeline.
///
/// Extraction runs on a blocking worker so the async loop stays responsive.
async fn analyze_handler<C>(
    State(state): State<AppState<C>>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError>
where
    C: ChatProvider + Send + Sync + 'static,
{
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid multipart body: {}", e)))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("upload").to_string();
            let media_type = field.content_type().unwrap_or("").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("could not read upload: {}", e)))?;
            upload = Some((filename, media_type, data));
            break;
        }
    }

    let (filename, media_type, data) =
        upload.ok_or_else(|| AppError::BadRequest("missing 'file' field".to_string()))?;

    if data.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::TooLarge(data.len()));
    }

    info!(
        file = %filename,
        media_type = %media_type,
        bytes = data.len(),
        "analyzing uploaded brief"
    );

    let brief_text = tokio::task::spawn_blocking(move || {
        briefdeck_extract::extract_named(&data, &media_type, &filename)
    })
    .await
    .map_err(|e| AppError::Internal(format!("extraction task failed: {}", e)))?
    .map_err(AppError::Extract)?;

    let analysis = state
        .analyzer
        .analyze(&brief_text)
        .await
        .map_err(AppError::Analyze)?;

    Ok(Json(AnalyzeResponse {
        reasoning: analysis.reasoning,
        breakdown: analysis.breakdown,
        raw: analysis.raw,
        saved: analysis.saved,
    }))
}

/// GET /api/recent - Most recently stored examples, newest first
async fn recent_handler<C>(
    State(state): State<AppState<C>>,
    Query(params): Query<RecentParams>,
) -> Result<Json<Vec<ExampleSummary>>, AppError>
where
    C: ChatProvider + Send + Sync + 'static,
{
    let limit = params.limit.unwrap_or(DEFAULT_RECENT_LIMIT);

    let examples = {
        let store = state
            .store
            .lock()
            .map_err(|_| AppError::Internal("store lock poisoned".to_string()))?;
        store
            .recent(limit)
            .map_err(|e| AppError::Internal(e.to_string()))?
    };

    let summaries = examples
        .into_iter()
        .map(|e| ExampleSummary {
            brief_excerpt: excerpt(&e.brief_text, 200),
            breakdown_text: e.breakdown_text,
            created_at: e.created_at,
        })
        .collect();

    Ok(Json(summaries))
}

/// GET /api/health - Inference endpoint probe plus store count
async fn health_handler<C>(State(state): State<AppState<C>>) -> Json<HealthCheckResponse>
where
    C: ChatProvider + Send + Sync + 'static,
{
    let health = state.analyzer.health().await;

    Json(HealthCheckResponse {
        status: if health.llm_available { "ok" } else { "degraded" }.to_string(),
        llm_available: health.llm_available,
        example_count: health.example_count,
    })
}

fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}…", cut.trim_end())
    }
}

/// Create the axum router with all routes
pub fn create_router<C>(state: AppState<C>) -> Router
where
    C: ChatProvider + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index_handler))
        .route("/api/analyze", post(analyze_handler::<C>))
        .route("/api/recent", get(recent_handler::<C>))
        .route("/api/health", get(health_handler::<C>))
        // Leave headroom above the cap so the handler reports the overrun
        // itself instead of a bare 413 from the body limit layer.
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 64 * 1024))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_short_text_unchanged() {
        assert_eq!(excerpt("short brief", 200), "short brief");
    }

    #[test]
    fn test_excerpt_truncates_long_text() {
        let long = "x".repeat(300);
        let cut = excerpt(&long, 200);
        assert!(cut.chars().count() <= 201);
        assert!(cut.ends_with('…'));
    }
}
