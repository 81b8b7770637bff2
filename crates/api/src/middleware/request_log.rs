use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::router::REQUEST_ID_HEADER;

/// Log every inbound request as a structured `incoming_http_request` event.
///
/// Must run inside the request-id layer so the generated id is available.
pub async fn log_request(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    tracing::info!(
        log_type = "incoming_http_request",
        method = %request.method(),
        path = request.uri().path(),
        query = request.uri().query().unwrap_or(""),
        request_id,
        "Incoming request"
    );

    next.run(request).await
}
