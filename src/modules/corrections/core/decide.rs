use crate::modules::attendance::core::ledger::TimeEntry;
use crate::modules::corrections::core::request::{
    CorrectionRejection, CorrectionRequest, Resolution,
};
use crate::modules::corrections::use_cases::submit_correction::command::SubmitCorrection;
use crate::shared::core::primitives::{ApprovalStatus, minutes_between};
use chrono::{DateTime, Utc};

/// Validates a submission against the entry it targets. An entry owned by
/// someone else is reported as missing.
pub fn decide_submission(
    entry: Option<&TimeEntry>,
    command: SubmitCorrection,
    request_id: String,
) -> Result<CorrectionRequest, CorrectionRejection> {
    let entry = entry
        .filter(|e| e.employee_id == command.requester_id)
        .ok_or(CorrectionRejection::EntryNotFound)?;
    let original_out = entry.clock_out.ok_or(CorrectionRejection::EntryStillOpen)?;
    if command.employee_reason.trim().is_empty() {
        return Err(CorrectionRejection::MissingReason);
    }
    if command.proposed_clock_in.is_none() && command.proposed_clock_out.is_none() {
        return Err(CorrectionRejection::NothingProposed);
    }
    let clock_in = command.proposed_clock_in.unwrap_or(entry.clock_in);
    let clock_out = command.proposed_clock_out.unwrap_or(original_out);
    if clock_out <= clock_in {
        return Err(CorrectionRejection::InvalidInterval);
    }

    Ok(CorrectionRequest {
        id: request_id,
        time_entry_id: entry.id.clone(),
        employee_id: entry.employee_id.clone(),
        organization_id: entry.organization_id.clone(),
        employee_reason: command.employee_reason.trim().to_string(),
        proposed_clock_in: command.proposed_clock_in,
        proposed_clock_out: command.proposed_clock_out,
        status: ApprovalStatus::Pending,
        requested_at: command.requested_at,
        reviewer_notes: None,
        reviewed_by: None,
        reviewed_at: None,
        corrected_entry_id: None,
    })
}

/// The approved replacement for `original`. The original row is never touched.
pub fn corrected_entry(
    original: &TimeEntry,
    request: &CorrectionRequest,
    resolution: &Resolution,
) -> Result<TimeEntry, CorrectionRejection> {
    let clock_in = request.proposed_clock_in.unwrap_or(original.clock_in);
    let clock_out = request
        .proposed_clock_out
        .or(original.clock_out)
        .ok_or(CorrectionRejection::EntryStillOpen)?;
    if clock_out <= clock_in {
        return Err(CorrectionRejection::InvalidInterval);
    }
    let entry_id = resolution
        .corrected_entry_id
        .clone()
        .ok_or(CorrectionRejection::RequestNotFound)?;
    Ok(TimeEntry {
        id: entry_id,
        clock_in,
        clock_out: Some(clock_out),
        duration_minutes: Some(minutes_between(clock_in, clock_out)),
        notes: Some(format!("Corrected: {}", request.employee_reason)),
        approval_status: ApprovalStatus::Approved,
        approved_by: Some(resolution.reviewed_by.clone()),
        approved_at: Some(resolution.reviewed_at),
        labor_cost: None,
        supersedes: Some(original.id.clone()),
        last_event_id: None,
        ..original.clone()
    })
}

pub fn resolution(
    status: ApprovalStatus,
    reviewer_id: &str,
    reviewed_at: DateTime<Utc>,
    reviewer_notes: Option<String>,
    corrected_entry_id: Option<String>,
) -> Resolution {
    Resolution {
        status,
        reviewed_by: reviewer_id.to_string(),
        reviewed_at,
        reviewer_notes,
        corrected_entry_id,
    }
}
