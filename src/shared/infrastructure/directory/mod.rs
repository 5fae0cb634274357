// Read-only ports onto the organization directory and the shift schedule.

use crate::shared::core::primitives::Role;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub mod in_memory;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub organization_id: String,
    pub name: String,
    pub hourly_rate: Option<Decimal>,
    pub utc_offset_minutes: i32,
    pub role: Role,
}

impl Employee {
    pub fn timezone(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).unwrap_or_else(|| Utc.fix())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftSchedule {
    pub id: String,
    pub employee_id: String,
    /// Local calendar date the shift belongs to.
    pub date: NaiveDate,
    pub scheduled_start: DateTime<Utc>,
    pub scheduled_end: DateTime<Utc>,
}

#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    async fn get_employee(&self, employee_id: &str) -> anyhow::Result<Option<Employee>>;

    async fn list_employees(&self, organization_id: Option<&str>) -> anyhow::Result<Vec<Employee>>;
}

#[async_trait]
pub trait ScheduleLookup: Send + Sync {
    async fn shifts_on(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> anyhow::Result<Vec<ShiftSchedule>>;
}
