//! Handlers for the `/items` resource.
//!
//! Bodies are bare (no `{ "data": ... }` envelope) and use camelCase keys.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use exampulumi_db::models::item::{CreateItem, UpdateItem};

use crate::error::AppResult;
use crate::extract::{IdPath, WireJson};
use crate::state::AppState;

/// POST /api/items
///
/// Create an item. `id`, `isActive` and the timestamps are server-generated.
pub async fn create(
    State(state): State<AppState>,
    WireJson(input): WireJson<CreateItem>,
) -> AppResult<impl IntoResponse> {
    let item = state.items.create(&input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/items
///
/// List every item in insertion order. `isActive` is not used as a filter.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = state.items.list().await?;
    Ok(Json(items))
}

/// GET /api/items/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    let item = state.items.get(id).await?;
    Ok(Json(item))
}

/// PATCH /api/items/{id}
///
/// Apply any subset of `title`, `description`, `isActive`. Omitted or
/// `null` fields keep their stored values.
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    WireJson(input): WireJson<UpdateItem>,
) -> AppResult<impl IntoResponse> {
    let item = state.items.update(id, &input).await?;
    Ok(Json(item))
}

/// DELETE /api/items/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    state.items.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
