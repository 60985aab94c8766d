//! Proxy error type and its HTTP representation.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Failure while serving `/api/movies`.
///
/// The `Display` text is exactly what the caller sees in the `error` field.
/// Upstream details stay in the wrapped error and are only logged.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::module_name_repetitions)]
pub enum ProxyError {
    /// No API key was configured for the process.
    #[error("TMDb API key is not defined in environment variables.")]
    MissingApiKey,
    /// The upstream request failed (transport, non-2xx status or bad JSON).
    #[error("Failed to fetch movies from TMDb API.")]
    Upstream(anyhow::Error),
}

/// JSON body of an error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
