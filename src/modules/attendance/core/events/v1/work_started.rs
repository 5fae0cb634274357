use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkStartedV1 {
    pub employee_id: String,
    pub organization_id: String,
    pub date: NaiveDate,
    pub entry_id: String,
    pub started_at: DateTime<Utc>,
    pub assisted_by: Option<String>,
    pub shift_id: Option<String>,
    pub late_by_minutes: Option<i64>,
    /// Task the employee is clocking time against.
    #[serde(default)]
    pub task_id: Option<String>,
}
