use crate::modules::attendance::core::break_policy::break_requirements;
use crate::modules::attendance::core::state::{AttendanceSession, BreakType, SessionState};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Read model returned after every clock action and by session lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub employee_id: String,
    pub date: Option<NaiveDate>,
    pub state: SessionState,
    pub break_type: Option<BreakType>,
    pub segment_started_at: Option<DateTime<Utc>>,
    pub open_entry_id: Option<String>,
    pub worked_minutes: i64,
    pub break_minutes: i64,
    pub clocked_in_late: bool,
    pub assisted_by: Option<String>,
    pub requires_meal_break: bool,
    pub suggested_break_type: Option<BreakType>,
}

impl SessionSnapshot {
    pub fn capture(
        session: &AttendanceSession,
        employee_id: &str,
        now: DateTime<Utc>,
        meal_break_threshold_minutes: i64,
    ) -> Self {
        let requirements = break_requirements(session, now, meal_break_threshold_minutes);
        Self {
            employee_id: employee_id.to_string(),
            date: session.date,
            state: session.state,
            break_type: session.break_type,
            segment_started_at: session.segment_started_at(),
            open_entry_id: session.open_entry_id.clone(),
            worked_minutes: session.worked_seconds_at(now) / 60,
            break_minutes: session.break_seconds_at(now) / 60,
            clocked_in_late: session.clocked_in_late,
            assisted_by: session.assisted_by.clone(),
            requires_meal_break: requirements.requires_meal_break,
            suggested_break_type: requirements.suggested_break_type,
        }
    }
}
