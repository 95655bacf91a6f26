use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::modules::walks::core::filter::WalkFilter;
use crate::modules::walks::core::patch::WalkPatch;
use crate::modules::walks::core::walk::Walk;
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Walk>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(walk) = body?;
    let created = state.walks.create(walk).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list(
    State(state): State<AppState>,
    filter: Result<Query<WalkFilter>, QueryRejection>,
) -> Result<Json<Vec<Walk>>, ApiError> {
    let Query(filter) = filter?;
    Ok(Json(state.walks.list(&filter).await?))
}

pub async fn get(
    State(state): State<AppState>,
    walk_id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Walk>, ApiError> {
    let Path(walk_id) = walk_id?;
    Ok(Json(state.walks.get(walk_id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    walk_id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<WalkPatch>, JsonRejection>,
) -> Result<Json<Walk>, ApiError> {
    let Path(walk_id) = walk_id?;
    let Json(patch) = body?;
    Ok(Json(state.walks.update(walk_id, patch).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    walk_id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(walk_id) = walk_id?;
    state.walks.delete(walk_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
