use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::settings::core::attendance_settings::AttendanceSettingsPatch;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

pub async fn get_settings(
    State(state): State<AppState>,
    Path(organization_id): Path<String>,
) -> impl IntoResponse {
    match state.settings.get(&organization_id).await {
        Ok(settings) => Json(settings).into_response(),
        Err(error) => error_response(&error),
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Path(organization_id): Path<String>,
    body: Result<Json<AttendanceSettingsPatch>, JsonRejection>,
) -> impl IntoResponse {
    let Json(patch) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.settings.handle(&organization_id, patch).await {
        Ok(settings) => Json(settings).into_response(),
        Err(error) => error_response(&error),
    }
}
