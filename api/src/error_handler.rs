use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ai_llm_service::{AiLlmError, ConfigError};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{error, warn};

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error(transparent)]
    Config(#[from] ConfigError),

    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request ---
    #[error("bad request: {0}")]
    BadRequest(String),

    // --- Upstream ---
    /// Upstream answered without `choices`; the raw body is echoed back.
    #[error("upstream response has no `choices`")]
    Upstream(Value),

    /// Transport or decode failure while talking to the LLM.
    #[error(transparent)]
    Llm(#[from] AiLlmError),

    /// Anything else, including a panicking handler.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Bind(_)
            | AppError::Server(_)
            | AppError::Upstream(_)
            | AppError::Llm(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable label placed in the `error` field.
    fn error_label(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "Bad request",
            AppError::Upstream(_) => "Gemini 2.0 API Error",
            _ => "Server error",
        }
    }
}

/// Error body: `{"error": <label>, "details": <any>}`.
#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    details: Value,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error = self.error_label();

        if status.is_server_error() {
            error!(%status, error = %self, "request failed");
        } else {
            warn!(%status, error = %self, "request rejected");
        }

        let details = match self {
            AppError::Upstream(body) => body,
            AppError::BadRequest(msg) | AppError::Internal(msg) => Value::String(msg),
            other => Value::String(other.to_string()),
        };

        (status, Json(ErrorBody { error, details })).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(err: axum::extract::rejection::JsonRejection) -> Self {
        AppError::BadRequest(err.body_text())
    }
}
