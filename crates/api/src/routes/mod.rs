pub mod health;
pub mod resource;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router};
use campus_db::models::item::Item;
use campus_db::models::student::Student;
use campus_db::models::subject::Subject;
use serde_json::json;

use crate::state::AppState;

/// Build the top-level route tree.
///
/// ```text
/// GET    /items, /students, /subjects           list
/// POST   /items, /students, /subjects           create
/// GET    /items/{id}, /students/{id}, ...       get_by_id
/// PUT    /items/{id}, /students/{id}, ...       update
/// DELETE /items/{id}, /students/{id}, ...       delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/items", resource::router::<Item>())
        .nest("/students", resource::router::<Student>())
        .nest("/subjects", resource::router::<Subject>())
}

/// Fallback for unmatched (method, path) pairs.
///
/// Any unregistered route answers 404 with this fixed payload, whatever
/// the method.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({"message": "Not found"})))
}
