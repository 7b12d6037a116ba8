//! Student entity model and input DTO.

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};

use campus_core::types::{DbId, Timestamp};

use crate::repositories::CrudEntity;

/// A student row from the `students` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub name: String,
    pub age: i32,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input DTO for creating or replacing a student.
#[derive(Debug, Clone, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub age: i32,
}

impl CrudEntity for Student {
    const ENTITY: &'static str = "Student";
    const TABLE: &'static str = "students";
    const COLUMNS: &'static str = "id, name, age, deleted_at, created_at, updated_at";
    const INSERT_COLUMNS: &'static str = "name, age";
    const INSERT_PLACEHOLDERS: &'static str = "$1, $2";
    const UPDATE_SET: &'static str = "name = $1, age = $2";
    const FIELD_COUNT: usize = 2;

    type Input = NewStudent;

    fn bind_fields<'q>(
        query: QueryAs<'q, Postgres, Self, PgArguments>,
        input: &'q NewStudent,
    ) -> QueryAs<'q, Postgres, Self, PgArguments> {
        query.bind(&input.name).bind(input.age)
    }
}
