//! Item entity model and input DTO.

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};

use campus_core::types::{DbId, Timestamp};

use crate::repositories::CrudEntity;

/// An item row from the `items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Item {
    pub id: DbId,
    pub name: String,
    pub price: f64,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input DTO for creating or replacing an item.
#[derive(Debug, Clone, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub price: f64,
}

impl CrudEntity for Item {
    const ENTITY: &'static str = "Item";
    const TABLE: &'static str = "items";
    const COLUMNS: &'static str = "id, name, price, deleted_at, created_at, updated_at";
    const INSERT_COLUMNS: &'static str = "name, price";
    const INSERT_PLACEHOLDERS: &'static str = "$1, $2";
    const UPDATE_SET: &'static str = "name = $1, price = $2";
    const FIELD_COUNT: usize = 2;

    type Input = NewItem;

    fn bind_fields<'q>(
        query: QueryAs<'q, Postgres, Self, PgArguments>,
        input: &'q NewItem,
    ) -> QueryAs<'q, Postgres, Self, PgArguments> {
        query.bind(&input.name).bind(input.price)
    }
}
