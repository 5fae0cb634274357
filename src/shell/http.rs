use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;

use crate::modules::attendance::use_cases::clock_tokens::inbound::http as clock_tokens_http;
use crate::modules::attendance::use_cases::get_attendance_session::inbound::http as session_http;
use crate::modules::attendance::use_cases::list_time_entries::inbound::http as list_http;
use crate::modules::attendance::use_cases::record_clock_action::inbound::http as clock_action_http;
use crate::modules::attendance::use_cases::review_time_entries::inbound::http as review_entries_http;
use crate::modules::corrections::use_cases::review_correction::inbound::http as review_correction_http;
use crate::modules::corrections::use_cases::submit_correction::inbound::http as submit_correction_http;
use crate::modules::payroll::use_cases::compute_pay::inbound::http as pay_http;
use crate::modules::payroll::use_cases::export_payroll::inbound::http as export_http;
use crate::modules::settings::use_cases::update_attendance_settings::inbound::http as settings_http;
use crate::shared::application::errors::{ApplicationError, ErrorKind};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/clock-tokens", post(clock_tokens_http::handle))
        .route("/clock-actions", post(clock_action_http::handle))
        .route("/attendance-session", get(session_http::handle))
        .route("/time-entries", get(list_http::handle))
        .route("/time-entries/approve", post(review_entries_http::approve))
        .route("/time-entries/reject", post(review_entries_http::reject))
        .route("/corrections", post(submit_correction_http::handle))
        .route("/corrections/approve", post(review_correction_http::approve))
        .route("/corrections/reject", post(review_correction_http::reject))
        .route("/payroll/summary", get(pay_http::handle))
        .route("/payroll/export", get(export_http::handle))
        .route(
            "/organizations/{organization_id}/attendance-settings",
            get(settings_http::get_settings).patch(settings_http::handle),
        )
        .with_state(state)
}

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::State => StatusCode::CONFLICT,
        ErrorKind::Authorization => StatusCode::FORBIDDEN,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Expired => StatusCode::GONE,
        ErrorKind::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
    }
}

pub fn error_response(error: &ApplicationError) -> Response {
    let kind = error.kind();
    let body = json!({ "kind": kind.code(), "message": error.to_string() });
    (status_for(kind), Json(body)).into_response()
}
