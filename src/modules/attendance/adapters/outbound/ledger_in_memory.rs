use crate::modules::attendance::adapters::outbound::ledger::{
    EntryReview, ReviewOutcome, TimeEntryLedger, WatermarkRepository,
};
use crate::modules::attendance::core::ledger::TimeEntry;
use crate::modules::attendance::use_cases::list_time_entries::queries_port::TimeEntryQueries;
use crate::shared::core::primitives::ApprovalStatus;
use anyhow::{anyhow, bail};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryLedger {
    entries: RwLock<HashMap<String, TimeEntry>>,
    watermarks: RwLock<HashMap<String, i64>>,
    is_offline: bool,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            bail!("Ledger offline");
        }
        Ok(())
    }
}

#[async_trait]
impl TimeEntryLedger for InMemoryLedger {
    async fn append_time_entry(&self, entry: TimeEntry) -> anyhow::Result<()> {
        self.ensure_online()?;
        let mut entries = self.entries.write().await;
        if let Some(existing) = entries.get(&entry.id) {
            if existing.last_event_id.is_some() && existing.last_event_id == entry.last_event_id {
                return Ok(());
            }
            bail!("time entry {} already exists", entry.id);
        }
        entries.insert(entry.id.clone(), entry);
        Ok(())
    }

    async fn close_time_entry(
        &self,
        entry_id: &str,
        clock_out: DateTime<Utc>,
        duration_minutes: i64,
    ) -> anyhow::Result<()> {
        self.ensure_online()?;
        let mut entries = self.entries.write().await;
        let entry = entries
            .get_mut(entry_id)
            .ok_or_else(|| anyhow!("time entry {entry_id} does not exist"))?;
        match entry.clock_out {
            Some(existing) if existing == clock_out => return Ok(()),
            Some(_) => bail!("time entry {entry_id} is already closed"),
            None => {}
        }
        entry.clock_out = Some(clock_out);
        entry.duration_minutes = Some(duration_minutes);
        Ok(())
    }

    async fn get_time_entry(&self, entry_id: &str) -> anyhow::Result<Option<TimeEntry>> {
        self.ensure_online()?;
        Ok(self.entries.read().await.get(entry_id).cloned())
    }

    async fn query_entries(
        &self,
        employee_id: Option<&str>,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> anyhow::Result<Vec<TimeEntry>> {
        self.ensure_online()?;
        let entries = self.entries.read().await;
        let mut matching: Vec<TimeEntry> = entries
            .values()
            .filter(|e| employee_id.is_none_or(|id| e.employee_id == id))
            .filter(|e| e.clock_in >= from && e.clock_in < to)
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.clock_in.cmp(&b.clock_in).then_with(|| a.id.cmp(&b.id)));
        Ok(matching)
    }

    async fn record_review(
        &self,
        entry_id: &str,
        review: EntryReview,
    ) -> anyhow::Result<ReviewOutcome> {
        self.ensure_online()?;
        let mut entries = self.entries.write().await;
        let Some(entry) = entries.get_mut(entry_id) else {
            return Ok(ReviewOutcome::Missing);
        };
        if entry.is_open() || entry.approval_status != ApprovalStatus::Pending {
            return Ok(ReviewOutcome::NotReviewable(entry.clone()));
        }
        entry.approval_status = review.status;
        entry.approved_by = Some(review.reviewer_id);
        entry.approved_at = Some(review.reviewed_at);
        entry.labor_cost = review.labor_cost;
        Ok(ReviewOutcome::Recorded(entry.clone()))
    }
}

#[async_trait]
impl WatermarkRepository for InMemoryLedger {
    async fn get(&self, name: &str) -> anyhow::Result<Option<i64>> {
        self.ensure_online()?;
        Ok(self.watermarks.read().await.get(name).copied())
    }

    async fn set(&self, name: &str, version: i64) -> anyhow::Result<()> {
        self.ensure_online()?;
        self.watermarks
            .write()
            .await
            .insert(name.to_string(), version);
        Ok(())
    }
}

#[async_trait]
impl TimeEntryQueries for InMemoryLedger {
    async fn list_by_employee_id(
        &self,
        employee_id: &str,
        offset: u64,
        limit: u64,
        sort_desc: bool,
    ) -> anyhow::Result<Vec<TimeEntry>> {
        self.ensure_online()?;
        let entries = self.entries.read().await;
        let mut rows: Vec<TimeEntry> = entries
            .values()
            .filter(|e| e.employee_id == employee_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.clock_in.cmp(&b.clock_in).then_with(|| a.id.cmp(&b.id)));
        if sort_desc {
            rows.reverse();
        }
        Ok(rows
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }
}
