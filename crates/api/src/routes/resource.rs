//! Route template shared by every CRUD resource.

use axum::routing::get;
use axum::Router;
use campus_db::repositories::CrudEntity;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::handlers::resource;
use crate::state::AppState;

/// Routes mounted at `/{resource}`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router<E>() -> Router<AppState>
where
    E: CrudEntity + Serialize + 'static,
    E::Input: DeserializeOwned,
{
    Router::new()
        .route("/", get(resource::list::<E>).post(resource::create::<E>))
        .route(
            "/{id}",
            get(resource::get_by_id::<E>)
                .put(resource::update::<E>)
                .delete(resource::delete::<E>),
        )
}
