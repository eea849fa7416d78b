use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Application errors that translate directly into an HTTP response. The
/// merge engine and the outbound clients never swallow an error — this is
/// the single translation point from internal kind to status + envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("schema validation failed: {0}")]
    SchemaValidationFailed(String),

    #[error("no annotations")]
    NoAnnotations,

    #[error("upstream resource not found")]
    UpstreamNotFound(Option<String>),

    #[error("upstream rejected the request")]
    UpstreamBadRequest(Option<String>),

    #[error("upstream service unavailable (status {0})")]
    UpstreamUnavailable(u16),

    #[error("draft store returned unexpected status {0} on read")]
    UnexpectedReadStatus(u16),

    #[error("draft store returned unexpected status {status} on write: {body:?}")]
    UnexpectedWriteStatus { status: u16, body: Option<String> },

    #[error("failed to decode an upstream response")]
    Decode(#[source] serde_json::Error),

    #[error("timeout while waiting on an upstream call")]
    DeadlineExceeded,

    #[error("transport error contacting an upstream dependency")]
    Transport(#[from] reqwest::Error),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::SchemaValidationFailed(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NoAnnotations => (StatusCode::NOT_FOUND, "no annotations found".to_string()),
            AppError::UpstreamNotFound(body) => (
                StatusCode::NOT_FOUND,
                body.clone().unwrap_or_else(|| "not found upstream".to_string()),
            ),
            AppError::UpstreamBadRequest(body) => (
                StatusCode::BAD_REQUEST,
                body.clone()
                    .unwrap_or_else(|| "upstream rejected the request".to_string()),
            ),
            AppError::UpstreamUnavailable(_) | AppError::Transport(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, self.to_string())
            }
            AppError::UnexpectedReadStatus(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::UnexpectedWriteStatus { status, body } => {
                let mapped =
                    StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                let message = body
                    .clone()
                    .unwrap_or_else(|| format!("draft store rejected the write (status {status})"));
                (mapped, message)
            }
            AppError::Decode(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "failed to decode an upstream response".to_string(),
            ),
            AppError::DeadlineExceeded => (
                StatusCode::GATEWAY_TIMEOUT,
                "Timeout while waiting on an upstream call".to_string(),
            ),
        };

        if status.is_server_error() {
            tracing::error!(status = ?status, error = %self, "request failed");
        } else {
            tracing::debug!(status = ?status, error = %self, "request rejected");
        }

        (status, Json(json!({ "message": message }))).into_response()
    }
}
