//! Shared response payload types for API handlers.

use serde::Serialize;

/// Confirmation payload returned by successful DELETE requests.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub status: &'static str,
}

impl Deleted {
    pub fn new() -> Self {
        Self { status: "deleted" }
    }
}

impl Default for Deleted {
    fn default() -> Self {
        Self::new()
    }
}
