//! `GET /health`: store reachability and schema state.
//!
//! The service is `ok` only when the store answers and its newest applied
//! migration is the newest one this build embeds. Anything else reports
//! `degraded` with the same 200 status so probes can read the body.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Degraded,
}

impl HealthStatus {
    fn from_checks(db_healthy: bool, schema_current: bool) -> Self {
        if db_healthy && schema_current {
            HealthStatus::Ok
        } else {
            HealthStatus::Degraded
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: HealthStatus,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Newest migration recorded in the store.
    pub schema_version: Option<i64>,
    /// Newest migration embedded in this build.
    pub expected_schema_version: Option<i64>,
}

async fn report(State(state): State<AppState>) -> Json<HealthReport> {
    let db_healthy = exampulumi_db::health_check(&state.pool).await.is_ok();

    let schema_version = if db_healthy {
        exampulumi_db::applied_migration(&state.pool)
            .await
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "Could not read applied migrations");
                None
            })
    } else {
        None
    };
    let expected_schema_version = exampulumi_db::latest_migration();

    let status = HealthStatus::from_checks(db_healthy, schema_version == expected_schema_version);
    if status == HealthStatus::Degraded {
        tracing::warn!(
            db_healthy,
            ?schema_version,
            ?expected_schema_version,
            "Health check degraded"
        );
    }

    Json(HealthReport {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        schema_version,
        expected_schema_version,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
