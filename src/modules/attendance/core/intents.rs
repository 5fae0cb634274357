/// Side effects requested by an accepted clock action. They run after the
/// events are stored and never affect the outcome of the action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendanceIntent {
    NotifyLateClockIn {
        employee_id: String,
        late_by_minutes: i64,
    },
    NotifyAssistedClockIn {
        employee_id: String,
        assisted_by: String,
    },
    NotifyMealBreakDue {
        employee_id: String,
        worked_minutes: i64,
    },
}
