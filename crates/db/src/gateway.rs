//! Generic persistence gateway.
//!
//! A [`Gateway`] owns a store handle and provides create/get/list/update/delete
//! for one entity type `E`, its create DTO `C` and its update DTO `U`. SQL
//! is assembled from the table and column constants each type declares, so
//! adding an entity means implementing three small traits rather than a new
//! repository.

use std::marker::PhantomData;

use exampulumi_core::error::CoreError;
use exampulumi_core::types::DbId;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::{FromRow, PgPool, Postgres};

use crate::error::classify;

/// A `query_as` builder bound to Postgres returning `E`.
pub type PgQueryAs<'q, E> = sqlx::query::QueryAs<'q, Postgres, E, PgArguments>;

/// A persisted row type with a UUID primary key named `id`.
pub trait Entity: for<'r> FromRow<'r, PgRow> + Send + Unpin + 'static {
    /// Human-readable name used in errors and logs.
    const NAME: &'static str;
    const TABLE: &'static str;
    /// Column list selected and returned by every query.
    const COLUMNS: &'static str;
    /// Column giving insertion order.
    const ORDER_COLUMN: &'static str;

    fn id(&self) -> DbId;
}

/// Input for inserting a new `E`.
pub trait CreateInput<E: Entity>: Send + Sync {
    /// Columns supplied by the input, bound by [`CreateInput::bind`] in this
    /// order starting at `$1`. Everything else takes its store default.
    const COLUMNS: &'static [&'static str];

    fn bind<'q>(&'q self, query: PgQueryAs<'q, E>) -> PgQueryAs<'q, E>;
}

/// Input for partially updating an `E`.
///
/// Only provided fields reach the `SET` clause, so columns the caller did
/// not mention are never written.
pub trait UpdateInput<E: Entity>: Send + Sync {
    /// Columns with a provided value, bound by [`UpdateInput::bind`] in this
    /// order starting at `$2`.
    fn columns(&self) -> Vec<&'static str>;

    fn bind<'q>(&'q self, query: PgQueryAs<'q, E>) -> PgQueryAs<'q, E>;

    /// `true` when no field was provided.
    fn is_empty(&self) -> bool {
        self.columns().is_empty()
    }
}

/// CRUD access to the table behind `E`.
pub struct Gateway<E, C, U> {
    pool: PgPool,
    _marker: PhantomData<fn() -> (E, C, U)>,
}

impl<E, C, U> Clone for Gateway<E, C, U> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _marker: PhantomData,
        }
    }
}

impl<E, C, U> Gateway<E, C, U>
where
    E: Entity,
    C: CreateInput<E>,
    U: UpdateInput<E>,
{
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _marker: PhantomData,
        }
    }

    /// Insert a new row, returning it with its generated id and timestamps.
    pub async fn create(&self, input: &C) -> Result<E, CoreError> {
        let placeholders = (1..=C::COLUMNS.len())
            .map(|i| format!("${i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let query = format!(
            "INSERT INTO {} ({}) VALUES ({placeholders}) RETURNING {}",
            E::TABLE,
            C::COLUMNS.join(", "),
            E::COLUMNS,
        );

        let entity = input
            .bind(sqlx::query_as::<_, E>(&query))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| classify(e, E::NAME, None))?;

        tracing::debug!(entity = E::NAME, id = %entity.id(), "Created");
        Ok(entity)
    }

    /// Fetch a row by primary key.
    pub async fn get(&self, id: DbId) -> Result<E, CoreError> {
        let query = format!("SELECT {} FROM {} WHERE id = $1", E::COLUMNS, E::TABLE);
        sqlx::query_as::<_, E>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| classify(e, E::NAME, Some(id)))?
            .ok_or(CoreError::NotFound {
                entity: E::NAME,
                id,
            })
    }

    /// All rows in insertion order.
    pub async fn list(&self) -> Result<Vec<E>, CoreError> {
        let query = format!(
            "SELECT {} FROM {} ORDER BY {}",
            E::COLUMNS,
            E::TABLE,
            E::ORDER_COLUMN,
        );
        sqlx::query_as::<_, E>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| classify(e, E::NAME, None))
    }

    /// Write the provided fields of `input` to the row with `id`.
    ///
    /// The row is read first so a missing id is reported as `NotFound`. An
    /// empty input returns that row without a write.
    pub async fn update(&self, id: DbId, input: &U) -> Result<E, CoreError> {
        let current = self.get(id).await?;
        let columns = input.columns();
        if columns.is_empty() {
            return Ok(current);
        }

        let assignments = columns
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{column} = ${}", i + 2))
            .collect::<Vec<_>>()
            .join(", ");
        let query = format!(
            "UPDATE {} SET {assignments} WHERE id = $1 RETURNING {}",
            E::TABLE,
            E::COLUMNS,
        );

        let updated = input
            .bind(sqlx::query_as::<_, E>(&query).bind(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| classify(e, E::NAME, Some(id)))?
            .ok_or(CoreError::NotFound {
                entity: E::NAME,
                id,
            })?;

        tracing::debug!(entity = E::NAME, %id, ?columns, "Updated");
        Ok(updated)
    }

    /// Permanently remove the row with `id`.
    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        let query = format!("DELETE FROM {} WHERE id = $1", E::TABLE);
        let result = sqlx::query(&query)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| classify(e, E::NAME, Some(id)))?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound {
                entity: E::NAME,
                id,
            });
        }

        tracing::debug!(entity = E::NAME, %id, "Deleted");
        Ok(())
    }
}
