use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::corrections::use_cases::review_correction::handler::ReviewCorrection;
use crate::shared::core::primitives::ApprovalStatus;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ReviewCorrectionsBody {
    pub reviewer_id: String,
    pub request_ids: Vec<String>,
    pub reviewer_notes: Option<String>,
}

async fn review(
    state: AppState,
    body: Result<Json<ReviewCorrectionsBody>, JsonRejection>,
    status: ApprovalStatus,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let now = Utc::now();
    let handler = &state.correction_reviews;

    if let [request_id] = body.request_ids.as_slice() {
        let review = ReviewCorrection {
            request_id: request_id.clone(),
            reviewer_id: body.reviewer_id,
            reviewer_notes: body.reviewer_notes,
            reviewed_at: now,
        };
        let result = match status {
            ApprovalStatus::Approved => handler.approve(review).await,
            _ => handler.reject(review).await,
        };
        return match result {
            Ok(request) => Json(request).into_response(),
            Err(error) => error_response(&error),
        };
    }

    let outcome = match status {
        ApprovalStatus::Approved => {
            handler
                .bulk_approve(&body.request_ids, &body.reviewer_id, body.reviewer_notes, now)
                .await
        }
        _ => {
            handler
                .bulk_reject(&body.request_ids, &body.reviewer_id, body.reviewer_notes, now)
                .await
        }
    };
    Json(outcome).into_response()
}

pub async fn approve(
    State(state): State<AppState>,
    body: Result<Json<ReviewCorrectionsBody>, JsonRejection>,
) -> impl IntoResponse {
    review(state, body, ApprovalStatus::Approved).await
}

pub async fn reject(
    State(state): State<AppState>,
    body: Result<Json<ReviewCorrectionsBody>, JsonRejection>,
) -> impl IntoResponse {
    review(state, body, ApprovalStatus::Rejected).await
}
