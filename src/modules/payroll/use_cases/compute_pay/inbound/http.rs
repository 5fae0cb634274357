use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::shared::application::errors::ApplicationError;
use crate::shared::core::primitives::DateRange;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct PaySummaryParams {
    pub employee_id: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<PaySummaryParams>,
) -> impl IntoResponse {
    let Some(range) = DateRange::new(params.from, params.to) else {
        return error_response(&ApplicationError::Validation(
            "from must not be after to".into(),
        ));
    };
    match state.payroll.handle(&params.employee_id, range).await {
        Ok(summary) => Json(summary).into_response(),
        Err(error) => error_response(&error),
    }
}
