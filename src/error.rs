//! API error type shared by the JSON routes.
//!
//! Every variant renders as `{"error": "<message>"}` with the matching status.
//! Handlers return `Result<_, ApiError>` so nothing escapes as a panic or a
//! plain-text rejection.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A required input is missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// The remote resource answered with a non-success status.
    #[error("Fetch failed {0}")]
    UpstreamStatus(u16),

    /// The remote resource could not be reached.
    #[error("Fetch failed: {0}")]
    UpstreamTransport(String),

    /// Anything else raised while handling the request.
    #[error("{0}")]
    Unexpected(String),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::UpstreamStatus(_) | Self::UpstreamTransport(_) => StatusCode::BAD_GATEWAY,
            Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
