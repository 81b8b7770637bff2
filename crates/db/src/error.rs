//! Classification of `sqlx` failures into [`CoreError`].
//!
//! - `RowNotFound` with a known id maps to `NotFound`.
//! - SQLSTATE `23505` (unique violation) maps to `ConstraintViolation`,
//!   carrying the column and value when the message can be parsed.
//! - The other integrity classes (`23502` not-null, `23503` foreign key,
//!   `23514` check) map to `ConstraintViolation(None)`.
//! - Everything else is logged and mapped to `Internal` with a sanitized message.

use exampulumi_core::error::CoreError;
use exampulumi_core::integrity::parse_duplicate_key;
use exampulumi_core::types::DbId;
use sqlx::error::DatabaseError;
use sqlx::postgres::PgDatabaseError;

const UNIQUE_VIOLATION: &str = "23505";
const INTEGRITY_VIOLATIONS: &[&str] = &["23502", "23503", "23514"];

/// Convert a store error raised while operating on `entity` (optionally a
/// specific row) into the domain taxonomy.
pub fn classify(err: sqlx::Error, entity: &'static str, id: Option<DbId>) -> CoreError {
    match err {
        sqlx::Error::RowNotFound => match id {
            Some(id) => CoreError::NotFound { entity, id },
            None => CoreError::Internal(format!("{entity} row unexpectedly missing")),
        },
        sqlx::Error::Database(db_err) => classify_database_error(db_err.as_ref(), entity),
        other => {
            tracing::error!(error = %other, entity, "Store error");
            CoreError::Internal(other.to_string())
        }
    }
}

fn classify_database_error(db_err: &dyn DatabaseError, entity: &'static str) -> CoreError {
    let code = db_err.code();
    let code = code.as_deref();

    if code == Some(UNIQUE_VIOLATION) {
        let message = full_message(db_err);
        let key = parse_duplicate_key(&message);
        tracing::debug!(entity, constraint = ?db_err.constraint(), ?key, "Unique violation");
        return CoreError::ConstraintViolation(key);
    }

    if code.is_some_and(|c| INTEGRITY_VIOLATIONS.contains(&c)) {
        tracing::debug!(entity, code, message = db_err.message(), "Integrity violation");
        return CoreError::ConstraintViolation(None);
    }

    tracing::error!(error = %db_err, entity, "Database error");
    CoreError::Internal(db_err.message().to_string())
}

/// Primary message plus the `DETAIL` line, laid out the way `psql` prints it.
fn full_message(db_err: &dyn DatabaseError) -> String {
    let detail = db_err
        .try_downcast_ref::<PgDatabaseError>()
        .and_then(PgDatabaseError::detail);

    match detail {
        Some(detail) => format!("{}\nDETAIL:  {detail}", db_err.message()),
        None => db_err.message().to_string(),
    }
}
