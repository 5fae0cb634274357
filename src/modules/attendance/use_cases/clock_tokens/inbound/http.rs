use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::attendance::use_cases::clock_tokens::service::IssueClockToken;
use crate::modules::attendance::use_cases::clock_tokens::token::ClockTokenAction;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct IssueClockTokenBody {
    pub employee_id: String,
    pub action: ClockTokenAction,
    pub requested_by: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<IssueClockTokenBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = IssueClockToken {
        employee_id: body.employee_id,
        action: body.action,
        requested_by: body.requested_by,
        now: Utc::now(),
    };

    match state.clock_tokens.issue(command).await {
        Ok(token) => (StatusCode::CREATED, Json(token)).into_response(),
        Err(error) => error_response(&error),
    }
}
