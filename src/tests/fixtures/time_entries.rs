use crate::modules::attendance::core::ledger::{EntryKind, TimeEntry};
use crate::shared::core::primitives::{ApprovalStatus, minutes_between};
use crate::tests::fixtures::at;
use chrono::{DateTime, Duration, Utc};

/// A closed 09:00 to 17:00 work entry for `e-1`, pending review.
pub struct TimeEntryBuilder {
    inner: TimeEntry,
    day_offset: i64,
}

impl TimeEntryBuilder {
    pub fn new() -> Self {
        let mut inner = TimeEntry::open("t-1", "e-1", "org-1", EntryKind::Work, at(9, 0));
        inner.clock_out = Some(at(17, 0));
        inner.duration_minutes = Some(480);
        Self {
            inner,
            day_offset: 0,
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn employee_id(mut self, v: impl Into<String>) -> Self {
        self.inner.employee_id = v.into();
        self
    }

    pub fn between(mut self, from: (u32, u32), to: (u32, u32)) -> Self {
        let shift = Duration::days(self.day_offset);
        let clock_in = at(from.0, from.1) + shift;
        let clock_out = at(to.0, to.1) + shift;
        self.inner.clock_in = clock_in;
        self.inner.clock_out = Some(clock_out);
        self.inner.duration_minutes = Some(minutes_between(clock_in, clock_out));
        self
    }

    /// Moves the entry `days` calendar days after the fixture day.
    pub fn day_offset(mut self, days: i64) -> Self {
        let shift = Duration::days(days - self.day_offset);
        self.inner.clock_in += shift;
        self.inner.clock_out = self.inner.clock_out.map(|t| t + shift);
        self.day_offset = days;
        self
    }

    pub fn open(mut self) -> Self {
        self.inner.clock_out = None;
        self.inner.duration_minutes = None;
        self
    }

    pub fn status(mut self, v: ApprovalStatus) -> Self {
        self.inner.approval_status = v;
        self
    }

    pub fn kind(mut self, v: EntryKind) -> Self {
        self.inner.kind = v;
        self
    }

    pub fn approved_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.approved_at = Some(v);
        self
    }

    pub fn supersedes(mut self, v: impl Into<String>) -> Self {
        self.inner.supersedes = Some(v.into());
        self
    }

    pub fn build(self) -> TimeEntry {
        self.inner
    }
}
