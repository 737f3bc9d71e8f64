//! Entity CRUD handlers, generic over the entity type.

use crate::error::AppError;
use crate::extractors::{EntityId, Payload};
use crate::model::Entity;
use crate::service::CrudService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

pub async fn list<E: Entity>(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = CrudService::read_all::<E>(state.store.as_ref()).await?;
    Ok((StatusCode::OK, Json(rows)))
}

pub async fn create<E: Entity>(
    State(state): State<AppState>,
    Payload(body): Payload<E::Create>,
) -> Result<impl IntoResponse, AppError> {
    let row = CrudService::create::<E>(state.store.as_ref(), body).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

pub async fn read<E: Entity>(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    let row = CrudService::read_one::<E>(state.store.as_ref(), id).await?;
    Ok((StatusCode::OK, Json(row)))
}

pub async fn update<E: Entity>(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    Payload(body): Payload<E::Update>,
) -> Result<impl IntoResponse, AppError> {
    let row = CrudService::update::<E>(state.store.as_ref(), id, body).await?;
    Ok((StatusCode::OK, Json(row)))
}

pub async fn delete<E: Entity>(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    CrudService::delete::<E>(state.store.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
