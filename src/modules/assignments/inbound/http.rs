use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::modules::assignments::core::assignment::Assignment;
use crate::modules::assignments::core::filter::AssignmentFilter;
use crate::modules::assignments::core::patch::AssignmentPatch;
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Assignment>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(assignment) = body?;
    let created = state.assignments.create(assignment).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list(
    State(state): State<AppState>,
    filter: Result<Query<AssignmentFilter>, QueryRejection>,
) -> Result<Json<Vec<Assignment>>, ApiError> {
    let Query(filter) = filter?;
    Ok(Json(state.assignments.list(&filter).await?))
}

pub async fn get(
    State(state): State<AppState>,
    assignment_id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Assignment>, ApiError> {
    let Path(assignment_id) = assignment_id?;
    Ok(Json(state.assignments.get(assignment_id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    assignment_id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<AssignmentPatch>, JsonRejection>,
) -> Result<Json<Assignment>, ApiError> {
    let Path(assignment_id) = assignment_id?;
    let Json(patch) = body?;
    Ok(Json(state.assignments.update(assignment_id, patch).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    assignment_id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(assignment_id) = assignment_id?;
    state.assignments.delete(assignment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
