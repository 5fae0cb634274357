use crate::modules::attendance::use_cases::check_clock_in_allowed::gate::GateClearance;
use crate::modules::attendance::use_cases::record_clock_action::command::{
    ClockAction, RecordClockAction,
};
use crate::tests::fixtures::{at, today};
use chrono::{DateTime, Utc};

pub struct RecordClockActionBuilder {
    inner: RecordClockAction,
}

impl RecordClockActionBuilder {
    pub fn new() -> Self {
        Self {
            inner: RecordClockAction {
                employee_id: "e-1".to_string(),
                organization_id: "org-1".to_string(),
                date: today(),
                action: ClockAction::ClockIn,
                occurred_at: at(9, 0),
                next_entry_id: "entry-x".to_string(),
                clearance: None,
                meal_break_threshold_minutes: 300,
                task_id: None,
            },
        }
    }

    pub fn action(mut self, v: ClockAction) -> Self {
        self.inner.action = v;
        self
    }

    pub fn occurred_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.occurred_at = v;
        self
    }

    pub fn next_entry_id(mut self, v: impl Into<String>) -> Self {
        self.inner.next_entry_id = v.into();
        self
    }

    pub fn clearance(mut self, v: GateClearance) -> Self {
        self.inner.clearance = Some(v);
        self
    }

    pub fn task_id(mut self, v: impl Into<String>) -> Self {
        self.inner.task_id = Some(v.into());
        self
    }

    pub fn build(self) -> RecordClockAction {
        self.inner
    }
}
