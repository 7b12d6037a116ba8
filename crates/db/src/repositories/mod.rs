//! Repository layer.
//!
//! A single generic [`Repo`] provides the CRUD capability set (list, get,
//! create, full-overwrite update, soft delete). Each entity describes its
//! own SQL schema through the [`CrudEntity`] trait, and the per-entity
//! repositories below are instantiations of the same abstraction.

mod crud;

pub use crud::{CrudEntity, Repo};

use crate::models::item::Item;
use crate::models::student::Student;
use crate::models::subject::Subject;

pub type ItemRepo = Repo<Item>;
pub type StudentRepo = Repo<Student>;
pub type SubjectRepo = Repo<Subject>;
