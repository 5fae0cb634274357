use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::attendance::use_cases::record_clock_action::command::ClockAction;
use crate::modules::attendance::use_cases::record_clock_action::handler::ClockActionRequest;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ClockActionBody {
    pub employee_id: String,
    #[serde(flatten)]
    pub action: ClockAction,
    pub token_nonce: Option<String>,
    pub assisted_by: Option<String>,
    pub task_id: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ClockActionBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let request = ClockActionRequest {
        employee_id: body.employee_id,
        action: body.action,
        token_nonce: body.token_nonce,
        assisted_by: body.assisted_by,
        occurred_at: Utc::now(),
        task_id: body.task_id,
    };

    match state.clock_actions.handle(request).await {
        Ok(snapshot) => Json(snapshot).into_response(),
        Err(error) => error_response(&error),
    }
}
