//! HTTP request handlers for the ingestion and policy boundaries.
//!
//! Failures reaching a client carry a short, fixed message. Full error
//! detail is only written to the server log, tagged with a request id the
//! client can quote.

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use inkwell_baseline::BaselinePipeline;
use inkwell_domain::{Baseline, Document, Policy};
use inkwell_extractor::{DocumentExtractor, PUBLIC_FAILURE_MESSAGE};
use inkwell_policy::PolicyStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Extract → compute pipeline shared by all uploads
    pub pipeline: Arc<BaselinePipeline<DocumentExtractor>>,
    /// Process-wide policy history
    pub policies: &'static PolicyStore,
    /// Largest accepted request body in bytes
    pub max_upload_bytes: usize,
}

/// Query parameters for `POST /baselines`
#[derive(Debug, Deserialize)]
pub struct BaselineParams {
    /// Original file name; its suffix selects the decoder
    pub filename: Option<String>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Number of policies loaded
    pub policy_count: usize,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Client-safe error message
    pub error: String,
    /// Correlates the response with server logs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Request is missing something the client must supply
    BadRequest(String),
    /// The uploaded document could not be decoded
    ExtractionFailed {
        /// Id logged alongside the full error
        request_id: Uuid,
    },
    /// No policy carries the requested version
    PolicyNotFound,
    /// Internal server error
    Internal {
        /// Id logged alongside the full error
        request_id: Uuid,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, request_id) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::ExtractionFailed { request_id } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                PUBLIC_FAILURE_MESSAGE.to_string(),
                Some(request_id),
            ),
            AppError::PolicyNotFound => (StatusCode::NOT_FOUND, "policy not found".to_string(), None),
            AppError::Internal { request_id } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
                Some(request_id),
            ),
        };

        let body = Json(ErrorResponse {
            error: message,
            request_id: request_id.map(|id| id.to_string()),
        });
        (status, body).into_response()
    }
}

/// POST /baselines?filename=<name> - Compute the baseline of an upload
///
/// The request body is the raw document.
async fn create_baseline(
    State(state): State<AppState>,
    Query(params): Query<BaselineParams>,
    body: Bytes,
) -> Result<Json<Baseline>, AppError> {
    let filename = params
        .filename
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("filename is required".to_string()))?;

    let request_id = Uuid::now_v7();
    let document = Document::new(filename, body.to_vec());
    let pipeline = Arc::clone(&state.pipeline);

    // Decoding is CPU-bound; keep it off the async workers
    let outcome = tokio::task::spawn_blocking(move || {
        let result = pipeline.process(&document);
        (document.filename, result)
    })
    .await;

    match outcome {
        Ok((filename, Ok(baseline))) => {
            info!(request_id = %request_id, filename = %filename, "Baseline created");
            Ok(Json(baseline))
        }
        Ok((filename, Err(e))) => {
            error!(request_id = %request_id, filename = %filename, "Extraction failed: {}", e);
            Err(AppError::ExtractionFailed { request_id })
        }
        Err(e) => {
            error!(request_id = %request_id, "Baseline task failed: {}", e);
            Err(AppError::Internal { request_id })
        }
    }
}

/// GET /policies - Full policy history, oldest first
async fn list_policies(State(state): State<AppState>) -> Json<Vec<Policy>> {
    Json(state.policies.policies().to_vec())
}

/// GET /policies/current - The policy in effect
async fn current_policy(State(state): State<AppState>) -> Json<Policy> {
    Json(state.policies.current_policy().clone())
}

/// GET /policies/:version - Exact-match version lookup
///
/// `current` is routed to [`current_policy`], so a policy literally
/// versioned "current" is not reachable here.
async fn policy_by_version(
    State(state): State<AppState>,
    Path(version): Path<String>,
) -> Result<Json<Policy>, AppError> {
    state
        .policies
        .get_policy_by_version(&version)
        .cloned()
        .map(Json)
        .ok_or(AppError::PolicyNotFound)
}

/// GET /health - Liveness check
async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "ok".to_string(),
        policy_count: state.policies.len(),
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    let max_upload_bytes = state.max_upload_bytes;

    AxumRouter::new()
        .route("/baselines", post(create_baseline))
        .route("/policies", get(list_policies))
        .route("/policies/current", get(current_policy))
        .route("/policies/:version", get(policy_by_version))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}
