use crate::shared::core::primitives::ApprovalStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CorrectionRejection {
    #[error("time entry not found")]
    EntryNotFound,
    #[error("correction request not found")]
    RequestNotFound,
    #[error("a correction for this time entry is already pending review")]
    AlreadyPending,
    #[error("this correction request was already reviewed")]
    AlreadyResolved,
    #[error("this time entry was already corrected, request a change to entry {corrected_entry_id} instead")]
    AlreadyCorrected { corrected_entry_id: String },
    #[error("the time entry is still open, clock out before requesting a correction")]
    EntryStillOpen,
    #[error("propose a new clock-in or clock-out time")]
    NothingProposed,
    #[error("the corrected clock-out must be after the clock-in")]
    InvalidInterval,
    #[error("explain why the entry needs correcting")]
    MissingReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionRequest {
    pub id: String,
    pub time_entry_id: String,
    pub employee_id: String,
    pub organization_id: String,
    pub employee_reason: String,
    pub proposed_clock_in: Option<DateTime<Utc>>,
    pub proposed_clock_out: Option<DateTime<Utc>>,
    pub status: ApprovalStatus,
    pub requested_at: DateTime<Utc>,
    pub reviewer_notes: Option<String>,
    pub reviewed_by: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub corrected_entry_id: Option<String>,
}

impl CorrectionRequest {
    pub fn is_pending(&self) -> bool {
        self.status == ApprovalStatus::Pending
    }
}

/// Terminal decision applied to a pending request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub status: ApprovalStatus,
    pub reviewed_by: String,
    pub reviewed_at: DateTime<Utc>,
    pub reviewer_notes: Option<String>,
    pub corrected_entry_id: Option<String>,
}
