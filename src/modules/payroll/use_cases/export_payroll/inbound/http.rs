use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::payroll::use_cases::export_payroll::handler::ExportFilter;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::primitives::DateRange;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ExportPayrollParams {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub organization_id: Option<String>,
    pub approved_only: Option<bool>,
    pub include_pending: Option<bool>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ExportPayrollParams>,
) -> impl IntoResponse {
    let Some(range) = DateRange::new(params.from, params.to) else {
        return error_response(&ApplicationError::Validation(
            "from must not be after to".into(),
        ));
    };
    let filter = ExportFilter {
        organization_id: params.organization_id,
        approved_only: params.approved_only.unwrap_or(false),
        include_pending: params.include_pending.unwrap_or(true),
    };
    match state.payroll_export.handle(range, filter).await {
        Ok(rows) => Json(rows).into_response(),
        Err(error) => error_response(&error),
    }
}
