use crate::modules::attendance::core::state::BreakType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Closes the running work segment and opens a break segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakStartedV1 {
    pub employee_id: String,
    pub organization_id: String,
    pub closed_entry_id: String,
    pub worked_seconds: i64,
    pub worked_minutes: i64,
    pub break_entry_id: String,
    pub break_type: BreakType,
    pub started_at: DateTime<Utc>,
}
