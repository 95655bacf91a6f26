use axum::{Json, extract::State};
use chrono::NaiveDateTime;
use serde::Serialize;

use crate::shell::error::ApiError;
use crate::shell::state::AppState;

pub const WELCOME_MESSAGE: &str = "Welcome to the Walk Service API. See /docs for details.";

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ServerTimeResponse {
    pub cloud_sql_time: NaiveDateTime,
}

pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
    })
}

pub async fn test_db(State(state): State<AppState>) -> Result<Json<ServerTimeResponse>, ApiError> {
    let server_time = state.database.server_time().await?;
    Ok(Json(ServerTimeResponse {
        cloud_sql_time: server_time,
    }))
}
