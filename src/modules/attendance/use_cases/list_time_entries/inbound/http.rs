use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shared::application::errors::ApplicationError;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListTimeEntriesParams {
    pub employee_id: String,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub sort_desc: Option<bool>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListTimeEntriesParams>,
) -> impl IntoResponse {
    match state
        .time_entries
        .list_by_employee_id(
            &params.employee_id,
            params.offset.unwrap_or(0),
            params.limit.unwrap_or(20).min(500),
            params.sort_desc.unwrap_or(true),
        )
        .await
    {
        Ok(entries) => Json(entries).into_response(),
        Err(error) => error_response(&ApplicationError::from(error)),
    }
}
