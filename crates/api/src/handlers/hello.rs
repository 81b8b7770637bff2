//! Liveness greeting at `/api/hello`, independent of the database.

use axum::Json;
use serde_json::{json, Value};

/// GET /api/hello
pub async fn hello() -> Json<Value> {
    Json(json!({ "Hello": "World" }))
}
