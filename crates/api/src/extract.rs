//! Request extractors that report failures as `{"detail": ...}` with 400.
//!
//! - [`WireJson`] -- JSON body decoded through the wire schema transform.
//! - [`IdPath`] -- a single UUID path segment.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use exampulumi_core::schema::{self, WireSchema};
use exampulumi_core::types::DbId;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppError;

/// JSON request body accepting camelCase or snake_case keys, with string
/// values trimmed.
///
/// ```ignore
/// async fn create(WireJson(input): WireJson<CreateItem>) -> AppResult<Json<Item>> { .. }
/// ```
#[derive(Debug)]
pub struct WireJson<T>(pub T);

impl<S, T> FromRequest<S> for WireJson<T>
where
    S: Send + Sync,
    T: WireSchema + DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(Self(schema::decode(body)?))
    }
}

/// The `{id}` path segment parsed as a UUID.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub DbId);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(Self(id))
    }
}
