//! HTTP API routes.

use crate::error::ApiError;
use crate::handlers::{self, SEARCH_RESULT_LIMIT};
use crate::models::{
    CodeAnalyzeRequest, MathSolveRequest, ProgressRequest, SearchParams, StudyQueryRequest,
};
use athena_common::config::ApiConfig;
use athena_common::util::truncate_with_ellipsis;
use axum::{
    body::Bytes,
    extract::rejection::{BytesRejection, QueryRejection},
    extract::{DefaultBodyLimit, Query, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Bodies above this size are treated as malformed.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Largest `maxResults` the search route accepts
    pub search_result_limit: u32,
    /// Static front-end served for unmatched paths
    pub static_dir: Option<PathBuf>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            search_result_limit: SEARCH_RESULT_LIMIT,
            static_dir: None,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self {
            static_dir: config.static_dir.clone(),
            ..Self::default()
        }
    }
}

/// Build the application router with CORS, tracing and body limits applied.
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.static_dir.clone();

    let router: Router = Router::new()
        // Health check
        .route("/health", get(health_check))
        // Study assistant API
        .route("/api/study/query", post(study_query))
        .route("/api/math/solve", post(math_solve))
        .route("/api/code/analyze", post(code_analyze))
        .route("/api/study/progress", post(study_progress))
        .route("/api/research/search", get(research_search))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state);

    let router = match static_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "Serving static files");
            router.fallback_service(ServeDir::new(dir))
        }
        None => router,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    )
}

/// Parse a JSON body, falling back to defaults when it is absent, oversized
/// or malformed.
fn parse_lenient<T: DeserializeOwned + Default>(body: Result<Bytes, BytesRejection>) -> T {
    let body = match body {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!(error = %e, "Unreadable request body, using defaults");
            return T::default();
        }
    };
    if body.is_empty() {
        return T::default();
    }
    match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(error = %e, "Malformed request body, using defaults");
            T::default()
        }
    }
}

// ============ Health Check ============

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "athena-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// ============ Study ============

async fn study_query(body: Result<Bytes, BytesRejection>) -> impl IntoResponse {
    let request: StudyQueryRequest = parse_lenient(body);
    tracing::debug!(query = %truncate_with_ellipsis(&request.query, 80), "Study query");
    Json(handlers::study_query(
        &request,
        &mut rand::thread_rng(),
        Utc::now(),
    ))
}

async fn study_progress(body: Result<Bytes, BytesRejection>) -> impl IntoResponse {
    let request: ProgressRequest = parse_lenient(body);
    Json(handlers::study_progress(&request, &mut rand::thread_rng()))
}

// ============ Math & Code ============

async fn math_solve(body: Result<Bytes, BytesRejection>) -> impl IntoResponse {
    let request: MathSolveRequest = parse_lenient(body);
    Json(handlers::solve_math(&request))
}

async fn code_analyze(body: Result<Bytes, BytesRejection>) -> impl IntoResponse {
    let request: CodeAnalyzeRequest = parse_lenient(body);
    tracing::debug!(bytes = request.code.len(), "Code analysis");
    Json(handlers::analyze_code(&request))
}

// ============ Research ============

async fn research_search(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(pairs) = query.map_err(|e| ApiError::InvalidQuery(e.body_text()))?;
    let params = SearchParams::from_pairs(pairs);
    let results =
        handlers::research_search(&params, &mut rand::thread_rng(), state.search_result_limit)?;
    Ok(Json(results))
}
