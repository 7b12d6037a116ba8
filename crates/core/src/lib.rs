//! Shared primitives for the campus services: ID and timestamp aliases
//! plus the domain error type.

pub mod error;
pub mod types;
