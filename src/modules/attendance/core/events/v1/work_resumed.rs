use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Closes the running break segment and opens a new work segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkResumedV1 {
    pub employee_id: String,
    pub organization_id: String,
    pub closed_entry_id: String,
    pub break_seconds: i64,
    pub break_minutes: i64,
    pub work_entry_id: String,
    pub resumed_at: DateTime<Utc>,
    #[serde(default)]
    pub task_id: Option<String>,
}
