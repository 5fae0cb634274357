use crate::modules::attendance::core::ledger::TimeEntry;
use async_trait::async_trait;

#[async_trait]
pub trait TimeEntryQueries: Send + Sync {
    async fn list_by_employee_id(
        &self,
        employee_id: &str,
        offset: u64,
        limit: u64,
        sort_desc: bool,
    ) -> anyhow::Result<Vec<TimeEntry>>;
}
