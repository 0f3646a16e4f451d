//! Error types for athena-api.

use athena_common::logging::generate_trace_id;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Mock API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid maxResults value: {0}")]
    InvalidMaxResults(String),

    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    #[error("maxResults {requested} exceeds search limit {limit}")]
    TooManyResults { requested: u32, limit: u32 },
}

/// Error body returned to clients. Failure details stay in the logs.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

/// Client-facing message for every search failure.
pub const SEARCH_FAILED: &str = "Research search failed";

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(trace_id = %generate_trace_id(), error = %self, "Research search failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            axum::Json(ErrorBody {
                error: SEARCH_FAILED,
            }),
        )
            .into_response()
    }
}
