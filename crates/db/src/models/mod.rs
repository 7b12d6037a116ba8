//! Entity models and input DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` input DTO with the entity's mutable fields
//!
//! Because updates are whole-record replacements, the same input DTO
//! serves both inserts and updates.

pub mod item;
pub mod student;
pub mod subject;
