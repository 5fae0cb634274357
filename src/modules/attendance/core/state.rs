use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Idle,
    Working,
    OnBreak,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SessionState::Idle => "idle",
            SessionState::Working => "working",
            SessionState::OnBreak => "on break",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakType {
    Coffee,
    Lunch,
    Other,
}

impl BreakType {
    pub fn label(self) -> &'static str {
        match self {
            BreakType::Coffee => "Coffee break",
            BreakType::Lunch => "Lunch break",
            BreakType::Other => "Break",
        }
    }
}

/// One employee's attendance for one local calendar day, folded from its
/// event stream. An overnight session stays on the day it started.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttendanceSession {
    pub employee_id: String,
    pub organization_id: String,
    pub date: Option<NaiveDate>,
    pub state: SessionState,
    pub work_started_at: Option<DateTime<Utc>>,
    pub break_started_at: Option<DateTime<Utc>>,
    pub break_type: Option<BreakType>,
    pub accumulated_work_seconds: i64,
    pub accumulated_break_seconds: i64,
    pub open_entry_id: Option<String>,
    pub lunch_taken: bool,
    pub assisted_by: Option<String>,
    pub clocked_in_late: bool,
    pub task_id: Option<String>,
}

impl AttendanceSession {
    pub fn is_active(&self) -> bool {
        self.state != SessionState::Idle
    }

    /// Start of the segment currently in progress.
    pub fn segment_started_at(&self) -> Option<DateTime<Utc>> {
        match self.state {
            SessionState::Idle => None,
            SessionState::Working => self.work_started_at,
            SessionState::OnBreak => self.break_started_at,
        }
    }

    pub fn worked_seconds_at(&self, now: DateTime<Utc>) -> i64 {
        let running = match (self.state, self.work_started_at) {
            (SessionState::Working, Some(started)) => (now - started).num_seconds().max(0),
            _ => 0,
        };
        self.accumulated_work_seconds + running
    }

    pub fn break_seconds_at(&self, now: DateTime<Utc>) -> i64 {
        let running = match (self.state, self.break_started_at) {
            (SessionState::OnBreak, Some(started)) => (now - started).num_seconds().max(0),
            _ => 0,
        };
        self.accumulated_break_seconds + running
    }
}
