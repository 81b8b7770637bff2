//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the gateways in `AppState` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod hello;
pub mod items;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// Fallback for unmatched routes, in the same `{"detail": ...}` shape as
/// every other error.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" })))
}
