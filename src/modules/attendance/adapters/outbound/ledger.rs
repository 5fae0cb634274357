use crate::modules::attendance::core::ledger::TimeEntry;
use crate::shared::core::primitives::ApprovalStatus;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryReview {
    pub status: ApprovalStatus,
    pub reviewer_id: String,
    pub reviewed_at: DateTime<Utc>,
    pub labor_cost: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    Recorded(TimeEntry),
    /// The entry is open or was already reviewed.
    NotReviewable(TimeEntry),
    Missing,
}

#[async_trait]
pub trait TimeEntryLedger: Send + Sync {
    /// Re-appending a row written by the same event is a no-op.
    async fn append_time_entry(&self, entry: TimeEntry) -> anyhow::Result<()>;

    /// Fails when the entry is missing or was closed at a different time.
    /// Closing again at the same instant is a no-op.
    async fn close_time_entry(
        &self,
        entry_id: &str,
        clock_out: DateTime<Utc>,
        duration_minutes: i64,
    ) -> anyhow::Result<()>;

    async fn get_time_entry(&self, entry_id: &str) -> anyhow::Result<Option<TimeEntry>>;

    /// Entries whose clock-in falls in `[from, to)`, ordered by clock-in.
    async fn query_entries(
        &self,
        employee_id: Option<&str>,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> anyhow::Result<Vec<TimeEntry>>;

    /// Applies the review only while the entry is closed and pending.
    async fn record_review(&self, entry_id: &str, review: EntryReview)
    -> anyhow::Result<ReviewOutcome>;
}

#[async_trait]
pub trait WatermarkRepository: Send + Sync {
    async fn get(&self, name: &str) -> anyhow::Result<Option<i64>>;
    async fn set(&self, name: &str, version: i64) -> anyhow::Result<()>;
}
