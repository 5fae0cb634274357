use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AttendanceSessionParams {
    pub employee_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<AttendanceSessionParams>,
) -> impl IntoResponse {
    match state.sessions.handle(&params.employee_id, Utc::now()).await {
        Ok(snapshot) => Json(snapshot).into_response(),
        Err(error) => error_response(&error),
    }
}
