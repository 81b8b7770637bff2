//! `{"detail": ...}` bodies for errors raised by tower-http layers.
//!
//! `TimeoutLayer` answers with a bare 408 and `CatchPanicLayer` defaults to a
//! plain-text 500. Both are reshaped here so every error leaving the service
//! has the same body as the handler errors in [`crate::error`].

use std::any::Any;

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use exampulumi_core::error::CoreError;

use crate::error::AppError;

/// Panic handler for `CatchPanicLayer::custom`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    };

    AppError::Core(CoreError::Internal(format!("handler panicked: {message}"))).into_response()
}

/// Replace the empty 408 produced by the timeout layer.
///
/// Handlers never answer 408 themselves, so a 408 without a content type
/// can only come from the layer.
pub async fn timeout_detail(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT
        && !response.headers().contains_key(CONTENT_TYPE)
    {
        return AppError::RequestTimeout.into_response();
    }
    response
}
