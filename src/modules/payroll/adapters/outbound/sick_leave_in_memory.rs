use crate::modules::payroll::adapters::outbound::sick_leave_repository::SickLeaveRepository;
use crate::modules::payroll::core::sick_leave::{BalanceHistoryRow, SickLeaveBalance};
use anyhow::bail;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    balances: BTreeMap<(String, i32), SickLeaveBalance>,
    history: Vec<BalanceHistoryRow>,
}

#[derive(Default)]
pub struct InMemorySickLeaveRepository {
    tables: RwLock<Tables>,
    is_offline: bool,
}

impl InMemorySickLeaveRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            bail!("Sick leave repository offline");
        }
        Ok(())
    }
}

#[async_trait]
impl SickLeaveRepository for InMemorySickLeaveRepository {
    async fn balances_for_year(&self, year: i32) -> anyhow::Result<Vec<SickLeaveBalance>> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        Ok(tables
            .balances
            .values()
            .filter(|b| b.year == year)
            .cloned()
            .collect())
    }

    async fn get(&self, employee_id: &str, year: i32) -> anyhow::Result<Option<SickLeaveBalance>> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        Ok(tables.balances.get(&(employee_id.to_string(), year)).cloned())
    }

    async fn insert_if_absent(
        &self,
        balance: SickLeaveBalance,
        history: Vec<BalanceHistoryRow>,
    ) -> anyhow::Result<bool> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        let key = (balance.employee_id.clone(), balance.year);
        if tables.balances.contains_key(&key) {
            return Ok(false);
        }
        tables.balances.insert(key, balance);
        tables.history.extend(history);
        Ok(true)
    }

    async fn history_for(&self, employee_id: &str) -> anyhow::Result<Vec<BalanceHistoryRow>> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        Ok(tables
            .history
            .iter()
            .filter(|row| row.employee_id == employee_id)
            .cloned()
            .collect())
    }
}
