//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn health_check_returns_ok_with_json(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["dbHealthy"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn health_reports_current_schema_version(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/health").await).await;

    let expected = exampulumi_db::latest_migration().unwrap();
    assert_eq!(json["schemaVersion"], expected);
    assert_eq!(json["expectedSchemaVersion"], expected);
}

#[sqlx::test(migrations = false)]
async fn health_is_degraded_without_migrations(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["dbHealthy"], true);
    assert!(json["schemaVersion"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn hello_returns_greeting(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/hello").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({"Hello": "World"}));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_route_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["detail"], "Not Found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn response_contains_x_request_id_header(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("response should carry x-request-id");
    assert!(uuid::Uuid::parse_str(request_id.to_str().unwrap()).is_ok());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn incoming_request_id_is_propagated(pool: PgPool) {
    use axum::body::Body;
    use axum::http::Request;

    let app = common::build_test_app(pool);
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();
    let response = common::send(app, request).await;

    assert_eq!(response.headers()["x-request-id"], "abc-123");
}
