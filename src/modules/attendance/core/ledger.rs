use crate::modules::attendance::core::state::BreakType;
use crate::shared::core::primitives::ApprovalStatus;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntryKind {
    Work,
    Break { break_type: BreakType },
}

/// A ledger row. Closing sets `clock_out` and `duration_minutes` once;
/// corrections add a new row pointing back through `supersedes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: String,
    pub employee_id: String,
    pub organization_id: String,
    #[serde(flatten)]
    pub kind: EntryKind,
    pub clock_in: DateTime<Utc>,
    pub clock_out: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i64>,
    pub source_task_id: Option<String>,
    pub shift_id: Option<String>,
    pub notes: Option<String>,
    pub approval_status: ApprovalStatus,
    pub approved_by: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
    pub labor_cost: Option<Decimal>,
    pub supersedes: Option<String>,
    pub last_event_id: Option<String>,
}

impl TimeEntry {
    pub fn open(
        id: impl Into<String>,
        employee_id: impl Into<String>,
        organization_id: impl Into<String>,
        kind: EntryKind,
        clock_in: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            employee_id: employee_id.into(),
            organization_id: organization_id.into(),
            kind,
            clock_in,
            clock_out: None,
            duration_minutes: None,
            source_task_id: None,
            shift_id: None,
            notes: None,
            approval_status: ApprovalStatus::Pending,
            approved_by: None,
            approved_at: None,
            labor_cost: None,
            supersedes: None,
            last_event_id: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }

    pub fn is_work(&self) -> bool {
        self.kind == EntryKind::Work
    }
}
