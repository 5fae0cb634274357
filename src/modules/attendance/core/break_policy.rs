use crate::modules::attendance::core::state::{AttendanceSession, BreakType};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Worked time after which a short break is suggested.
pub const SHORT_BREAK_AFTER_MINUTES: i64 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreakRequirements {
    pub requires_meal_break: bool,
    pub suggested_break_type: Option<BreakType>,
}

pub fn break_requirements(
    session: &AttendanceSession,
    now: DateTime<Utc>,
    meal_break_threshold_minutes: i64,
) -> BreakRequirements {
    let worked_minutes = session.worked_seconds_at(now) / 60;
    let requires_meal_break = worked_minutes > meal_break_threshold_minutes && !session.lunch_taken;
    let suggested_break_type = if requires_meal_break {
        Some(BreakType::Lunch)
    } else if session.is_active() && worked_minutes >= SHORT_BREAK_AFTER_MINUTES {
        Some(BreakType::Coffee)
    } else {
        None
    };
    BreakRequirements {
        requires_meal_break,
        suggested_break_type,
    }
}
