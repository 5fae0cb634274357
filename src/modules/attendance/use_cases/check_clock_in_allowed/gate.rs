use crate::modules::settings::core::attendance_settings::AttendanceSettings;
use crate::shared::core::primitives::minutes_between;
use crate::shared::infrastructure::directory::ShiftSchedule;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GateRejection {
    #[error("no scheduled shift today, ask a manager to schedule you or to clock you in")]
    NoScheduledShift,
    #[error("too early to clock in, the window opens at {opens_at}")]
    TooEarly { opens_at: DateTime<Utc> },
}

/// An allowed clock-in together with how it relates to the schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GateClearance {
    pub shift_id: Option<String>,
    pub late_by_minutes: Option<i64>,
    pub assisted_by: Option<String>,
    /// False when the clock-in only went through because a manager assisted it.
    pub within_window: bool,
}

fn closest_shift(shifts: &[ShiftSchedule], now: DateTime<Utc>) -> Option<&ShiftSchedule> {
    let mut ordered: Vec<&ShiftSchedule> = shifts.iter().collect();
    ordered.sort_by_key(|s| s.scheduled_start);
    ordered
        .into_iter()
        .min_by_key(|s| (s.scheduled_start - now).num_seconds().abs())
}

/// `shifts` are the employee's shifts on their local calendar day.
pub fn check_clock_in_allowed(
    settings: &AttendanceSettings,
    shifts: &[ShiftSchedule],
    now: DateTime<Utc>,
    assisted_by: Option<&str>,
) -> Result<GateClearance, GateRejection> {
    let shift = closest_shift(shifts, now);
    let late_by_minutes = shift.and_then(|s| {
        let deadline = s.scheduled_start + Duration::minutes(settings.late_clock_in_grace_minutes);
        (now > deadline).then(|| minutes_between(s.scheduled_start, now))
    });
    let verdict = match shift {
        None => Err(GateRejection::NoScheduledShift),
        Some(s) => {
            let opens_at =
                s.scheduled_start - Duration::minutes(settings.early_clock_in_grace_minutes);
            if now < opens_at {
                Err(GateRejection::TooEarly { opens_at })
            } else {
                Ok(())
            }
        }
    };

    let clearance = GateClearance {
        shift_id: shift.map(|s| s.id.clone()),
        late_by_minutes,
        assisted_by: assisted_by.map(str::to_string),
        within_window: verdict.is_ok(),
    };

    if !settings.require_schedule_for_clock_in || assisted_by.is_some() {
        return Ok(clearance);
    }
    verdict.map(|_| clearance)
}
