use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::shared::core::primitives::ApprovalStatus;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ReviewTimeEntriesBody {
    pub reviewer_id: String,
    pub entry_ids: Vec<String>,
}

async fn review(
    state: AppState,
    body: Result<Json<ReviewTimeEntriesBody>, JsonRejection>,
    status: ApprovalStatus,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let now = Utc::now();

    if let [entry_id] = body.entry_ids.as_slice() {
        let handler = &state.time_entry_reviews;
        let result = match status {
            ApprovalStatus::Approved => handler.approve(entry_id, &body.reviewer_id, now).await,
            _ => handler.reject(entry_id, &body.reviewer_id, now).await,
        };
        return match result {
            Ok(entry) => Json(entry).into_response(),
            Err(error) => error_response(&error),
        };
    }

    let outcome = state
        .time_entry_reviews
        .bulk_review(&body.entry_ids, &body.reviewer_id, status, now)
        .await;
    Json(outcome).into_response()
}

pub async fn approve(
    State(state): State<AppState>,
    body: Result<Json<ReviewTimeEntriesBody>, JsonRejection>,
) -> impl IntoResponse {
    review(state, body, ApprovalStatus::Approved).await
}

pub async fn reject(
    State(state): State<AppState>,
    body: Result<Json<ReviewTimeEntriesBody>, JsonRejection>,
) -> impl IntoResponse {
    review(state, body, ApprovalStatus::Rejected).await
}
