use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use exampulumi_core::error::CoreError;
use exampulumi_core::integrity::constraint_detail;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds request-shape failures.
/// Every variant renders as `{"detail": <message>}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `exampulumi_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A request the server could not interpret (bad JSON, bad path segment).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The request ran past the configured timeout.
    #[error("Request timed out")]
    RequestTimeout,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_DETAIL: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, core.to_string()),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::ConstraintViolation(key) => {
                    let detail = constraint_detail(key.as_ref());
                    tracing::info!(%detail, "Rejected write violating a store constraint");
                    (StatusCode::BAD_REQUEST, detail)
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_DETAIL.to_string())
                }
            },

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::RequestTimeout => (StatusCode::REQUEST_TIMEOUT, self.to_string()),
        };

        (status, axum::Json(json!({ "detail": detail }))).into_response()
    }
}
