use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::modules::events::core::event::Event;
use crate::modules::events::core::filter::EventFilter;
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Event>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(event) = body?;
    let created = state.events.create(event).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list(
    State(state): State<AppState>,
    filter: Result<Query<EventFilter>, QueryRejection>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let Query(filter) = filter?;
    Ok(Json(state.events.list(&filter).await?))
}

pub async fn get(
    State(state): State<AppState>,
    event_id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Event>, ApiError> {
    let Path(event_id) = event_id?;
    Ok(Json(state.events.get(event_id).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    event_id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(event_id) = event_id?;
    state.events.delete(event_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
