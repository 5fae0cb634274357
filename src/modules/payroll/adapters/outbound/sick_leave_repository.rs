use crate::modules::payroll::core::sick_leave::{BalanceHistoryRow, SickLeaveBalance};
use async_trait::async_trait;

#[async_trait]
pub trait SickLeaveRepository: Send + Sync {
    async fn balances_for_year(&self, year: i32) -> anyhow::Result<Vec<SickLeaveBalance>>;

    async fn get(&self, employee_id: &str, year: i32) -> anyhow::Result<Option<SickLeaveBalance>>;

    /// Writes the balance and its history together unless `(employee_id, year)`
    /// already exists. Returns whether anything was written.
    async fn insert_if_absent(
        &self,
        balance: SickLeaveBalance,
        history: Vec<BalanceHistoryRow>,
    ) -> anyhow::Result<bool>;

    async fn history_for(&self, employee_id: &str) -> anyhow::Result<Vec<BalanceHistoryRow>>;
}
