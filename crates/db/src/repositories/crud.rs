//! Generic CRUD repository over soft-deleted entity tables.

use std::marker::PhantomData;

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, PgPool, Postgres};

use campus_core::types::DbId;

/// SQL schema description for an entity managed by [`Repo`].
///
/// The constants drive query construction; `bind_fields` binds the input
/// DTO's values in declaration order, so `INSERT_PLACEHOLDERS` and
/// `UPDATE_SET` must number their parameters `$1..=$FIELD_COUNT`.
pub trait CrudEntity: for<'r> FromRow<'r, PgRow> + Send + Unpin + Sized {
    /// Display name used in error messages ("Item", "Student", ...).
    const ENTITY: &'static str;
    /// Table name.
    const TABLE: &'static str;
    /// Column list shared across queries to avoid repetition.
    const COLUMNS: &'static str;
    /// Mutable columns, in the order `bind_fields` binds them.
    const INSERT_COLUMNS: &'static str;
    /// Placeholder list matching `INSERT_COLUMNS` (`$1, $2, ...`).
    const INSERT_PLACEHOLDERS: &'static str;
    /// SET clause assigning every mutable column (`name = $1, ...`).
    const UPDATE_SET: &'static str;
    /// Number of mutable columns; the row id binds as `$FIELD_COUNT + 1`.
    const FIELD_COUNT: usize;

    /// Input DTO carrying the mutable fields for insert and update.
    type Input: Send + Sync;

    /// Bind the input's fields to `query` in declaration order.
    fn bind_fields<'q>(
        query: QueryAs<'q, Postgres, Self, PgArguments>,
        input: &'q Self::Input,
    ) -> QueryAs<'q, Postgres, Self, PgArguments>;
}

/// Provides CRUD operations for one entity type.
///
/// Zero-sized; all methods accept `&PgPool` as the first argument.
pub struct Repo<E>(PhantomData<E>);

impl<E: CrudEntity> Repo<E> {
    /// Insert a new row, returning the created entity with its
    /// server-assigned id and timestamps.
    pub async fn create(pool: &PgPool, input: &E::Input) -> Result<E, sqlx::Error> {
        let query = format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
            E::TABLE,
            E::INSERT_COLUMNS,
            E::INSERT_PLACEHOLDERS,
            E::COLUMNS
        );
        E::bind_fields(sqlx::query_as::<_, E>(&query), input)
            .fetch_one(pool)
            .await
    }

    /// Find an entity by its ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<E>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {} WHERE id = $1 AND deleted_at IS NULL",
            E::COLUMNS,
            E::TABLE
        );
        sqlx::query_as::<_, E>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all live rows in primary-key order. Excludes soft-deleted rows.
    pub async fn list(pool: &PgPool) -> Result<Vec<E>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {} WHERE deleted_at IS NULL ORDER BY id",
            E::COLUMNS,
            E::TABLE
        );
        sqlx::query_as::<_, E>(&query).fetch_all(pool).await
    }

    /// Replace every mutable field of an entity and refresh `updated_at`.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &E::Input,
    ) -> Result<Option<E>, sqlx::Error> {
        let query = format!(
            "UPDATE {} SET {}, updated_at = NOW()
             WHERE id = ${} AND deleted_at IS NULL
             RETURNING {}",
            E::TABLE,
            E::UPDATE_SET,
            E::FIELD_COUNT + 1,
            E::COLUMNS
        );
        E::bind_fields(sqlx::query_as::<_, E>(&query), input)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete an entity by ID. Returns `true` if a live row was marked
    /// deleted; a second call on the same id returns `false`.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!(
            "UPDATE {} SET deleted_at = NOW(), updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL",
            E::TABLE
        );
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find an entity by ID, including soft-deleted rows.
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<E>, sqlx::Error> {
        let query = format!("SELECT {} FROM {} WHERE id = $1", E::COLUMNS, E::TABLE);
        sqlx::query_as::<_, E>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
