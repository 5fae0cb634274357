use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::modules::corrections::use_cases::submit_correction::command::SubmitCorrection;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SubmitCorrectionBody {
    pub requester_id: String,
    pub time_entry_id: String,
    pub employee_reason: String,
    pub proposed_clock_in: Option<DateTime<Utc>>,
    pub proposed_clock_out: Option<DateTime<Utc>>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SubmitCorrectionBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = SubmitCorrection {
        requester_id: body.requester_id,
        time_entry_id: body.time_entry_id,
        employee_reason: body.employee_reason,
        proposed_clock_in: body.proposed_clock_in,
        proposed_clock_out: body.proposed_clock_out,
        requested_at: Utc::now(),
    };

    match state.corrections.handle(command).await {
        Ok(request) => (StatusCode::CREATED, Json(request)).into_response(),
        Err(error) => error_response(&error),
    }
}
