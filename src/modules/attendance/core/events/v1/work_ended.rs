use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndedSegment {
    Work,
    Break,
}

/// Clock-out. Closes whichever segment was running.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkEndedV1 {
    pub employee_id: String,
    pub closed_entry_id: String,
    pub ended_segment: EndedSegment,
    pub segment_seconds: i64,
    pub segment_minutes: i64,
    pub ended_at: DateTime<Utc>,
}
