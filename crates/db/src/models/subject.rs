//! Subject entity model and input DTO.
//!
//! `subject_id` is the human-facing course code (e.g. "CS-101") and is
//! distinct from the synthetic primary key `id`.

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};

use campus_core::types::{DbId, Timestamp};

use crate::repositories::CrudEntity;

/// A subject row from the `subjects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Subject {
    pub id: DbId,
    pub subject_id: String,
    pub subject_name: String,
    pub subject_credit: f64,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input DTO for creating or replacing a subject.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSubject {
    pub subject_id: String,
    pub subject_name: String,
    pub subject_credit: f64,
}

impl CrudEntity for Subject {
    const ENTITY: &'static str = "Subject";
    const TABLE: &'static str = "subjects";
    const COLUMNS: &'static str =
        "id, subject_id, subject_name, subject_credit, deleted_at, created_at, updated_at";
    const INSERT_COLUMNS: &'static str = "subject_id, subject_name, subject_credit";
    const INSERT_PLACEHOLDERS: &'static str = "$1, $2, $3";
    const UPDATE_SET: &'static str = "subject_id = $1, subject_name = $2, subject_credit = $3";
    const FIELD_COUNT: usize = 3;

    type Input = NewSubject;

    fn bind_fields<'q>(
        query: QueryAs<'q, Postgres, Self, PgArguments>,
        input: &'q NewSubject,
    ) -> QueryAs<'q, Postgres, Self, PgArguments> {
        query
            .bind(&input.subject_id)
            .bind(&input.subject_name)
            .bind(input.subject_credit)
    }
}
