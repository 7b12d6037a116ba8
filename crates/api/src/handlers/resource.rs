//! Generic handlers shared by every CRUD resource.
//!
//! Each handler is parameterized by the entity type and delegates to
//! [`Repo`]; the per-resource routers instantiate them with a concrete
//! entity. Extractor rejections are converted here so all failures use
//! the standard JSON error body:
//!
//! - an unparseable JSON body is a 400
//! - an unparseable `{id}` path segment is treated like an unknown id (404)

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_db::repositories::{CrudEntity, Repo};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::Deleted;
use crate::state::AppState;

/// Resolve the `{id}` path segment, mapping a malformed value to the same
/// 404 an unknown id would produce.
fn path_id<E: CrudEntity>(id: Result<Path<DbId>, PathRejection>) -> Result<DbId, AppError> {
    match id {
        Ok(Path(id)) => Ok(id),
        Err(_) => Err(AppError::NotFound(format!("{} not found", E::ENTITY))),
    }
}

/// GET /{resource}
pub async fn list<E>(State(state): State<AppState>) -> AppResult<Json<Vec<E>>>
where
    E: CrudEntity + Serialize + 'static,
{
    let rows = Repo::<E>::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /{resource}/{id}
pub async fn get_by_id<E>(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<E>>
where
    E: CrudEntity + Serialize + 'static,
{
    let id = path_id::<E>(id)?;
    let row = Repo::<E>::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: E::ENTITY,
            id,
        }))?;
    Ok(Json(row))
}

/// POST /{resource}
pub async fn create<E>(
    State(state): State<AppState>,
    payload: Result<Json<E::Input>, JsonRejection>,
) -> AppResult<(StatusCode, Json<E>)>
where
    E: CrudEntity + Serialize + 'static,
    E::Input: DeserializeOwned,
{
    let Json(input) = payload.map_err(|err| AppError::BadRequest(err.body_text()))?;
    let row = Repo::<E>::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /{resource}/{id}
pub async fn update<E>(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<E::Input>, JsonRejection>,
) -> AppResult<Json<E>>
where
    E: CrudEntity + Serialize + 'static,
    E::Input: DeserializeOwned,
{
    let id = path_id::<E>(id)?;
    let Json(input) = payload.map_err(|err| AppError::BadRequest(err.body_text()))?;
    let row = Repo::<E>::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: E::ENTITY,
            id,
        }))?;
    Ok(Json(row))
}

/// DELETE /{resource}/{id}
pub async fn delete<E>(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Deleted>>
where
    E: CrudEntity + 'static,
{
    let id = path_id::<E>(id)?;
    let deleted = Repo::<E>::soft_delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(Deleted::new()))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: E::ENTITY,
            id,
        }))
    }
}
