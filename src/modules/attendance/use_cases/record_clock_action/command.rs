use crate::modules::attendance::core::state::BreakType;
use crate::modules::attendance::use_cases::check_clock_in_allowed::gate::GateClearance;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ClockAction {
    ClockIn,
    StartBreak { break_type: BreakType },
    ResumeWork,
    ClockOut,
}

impl fmt::Display for ClockAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ClockAction::ClockIn => "clock in",
            ClockAction::StartBreak { .. } => "start a break",
            ClockAction::ResumeWork => "resume work",
            ClockAction::ClockOut => "clock out",
        };
        f.write_str(label)
    }
}

/// Domain command, built by the handler once the session stream is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordClockAction {
    pub employee_id: String,
    pub organization_id: String,
    pub date: NaiveDate,
    pub action: ClockAction,
    pub occurred_at: DateTime<Utc>,
    pub next_entry_id: String,
    pub clearance: Option<GateClearance>,
    pub meal_break_threshold_minutes: i64,
    pub task_id: Option<String>,
}
