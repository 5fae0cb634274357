use crate::modules::attendance::adapters::outbound::ledger::{
    EntryReview, ReviewOutcome, TimeEntryLedger,
};
use crate::modules::attendance::adapters::outbound::ledger_in_memory::InMemoryLedger;
use crate::modules::attendance::core::ledger::TimeEntry;
use anyhow::bail;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Delegates to an in-memory ledger, but the `nth` append (1-based) fails once.
pub struct FlakyLedger {
    inner: Arc<InMemoryLedger>,
    appends: AtomicUsize,
    failing_append: usize,
}

impl FlakyLedger {
    pub fn failing_append(inner: Arc<InMemoryLedger>, nth: usize) -> Self {
        Self {
            inner,
            appends: AtomicUsize::new(0),
            failing_append: nth,
        }
    }
}

#[async_trait]
impl TimeEntryLedger for FlakyLedger {
    async fn append_time_entry(&self, entry: TimeEntry) -> anyhow::Result<()> {
        let call = self.appends.fetch_add(1, Ordering::SeqCst) + 1;
        if call == self.failing_append {
            bail!("transient ledger failure");
        }
        self.inner.append_time_entry(entry).await
    }

    async fn close_time_entry(
        &self,
        entry_id: &str,
        clock_out: DateTime<Utc>,
        duration_minutes: i64,
    ) -> anyhow::Result<()> {
        self.inner
            .close_time_entry(entry_id, clock_out, duration_minutes)
            .await
    }

    async fn get_time_entry(&self, entry_id: &str) -> anyhow::Result<Option<TimeEntry>> {
        self.inner.get_time_entry(entry_id).await
    }

    async fn query_entries(
        &self,
        employee_id: Option<&str>,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> anyhow::Result<Vec<TimeEntry>> {
        self.inner.query_entries(employee_id, from, to).await
    }

    async fn record_review(
        &self,
        entry_id: &str,
        review: EntryReview,
    ) -> anyhow::Result<ReviewOutcome> {
        self.inner.record_review(entry_id, review).await
    }
}
