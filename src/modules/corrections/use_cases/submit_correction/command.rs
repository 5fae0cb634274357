use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitCorrection {
    pub requester_id: String,
    pub time_entry_id: String,
    pub employee_reason: String,
    pub proposed_clock_in: Option<DateTime<Utc>>,
    pub proposed_clock_out: Option<DateTime<Utc>>,
    pub requested_at: DateTime<Utc>,
}
