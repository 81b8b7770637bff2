pub mod health;
pub mod items;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /hello                 greeting (no database access)
///
/// /items                 list, create
/// /items/{id}            get, update (PATCH), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(handlers::hello::hello))
        .nest("/items", items::router())
}
