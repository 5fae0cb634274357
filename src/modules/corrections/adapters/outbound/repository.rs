use crate::modules::corrections::core::request::{CorrectionRequest, Resolution};
use crate::shared::core::primitives::ApprovalStatus;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    PendingExists,
    /// An approved request already replaced the entry with this one.
    AlreadyCorrected(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    Resolved(CorrectionRequest),
    NotPending(CorrectionRequest),
    Missing,
}

#[async_trait]
pub trait CorrectionRepository: Send + Sync {
    /// Inserts unless the same time entry already has a pending or an
    /// approved request.
    async fn insert_if_no_pending(&self, request: CorrectionRequest)
    -> anyhow::Result<InsertOutcome>;

    async fn get(&self, request_id: &str) -> anyhow::Result<Option<CorrectionRequest>>;

    /// Compare-and-set from pending to the resolution's status.
    async fn resolve_if_pending(
        &self,
        request_id: &str,
        resolution: Resolution,
    ) -> anyhow::Result<ResolveOutcome>;

    /// Compare-and-set from approved back to pending, used when the
    /// corrected entry could not be written.
    async fn reopen_if_approved(&self, request_id: &str) -> anyhow::Result<bool>;

    async fn list(
        &self,
        organization_id: &str,
        status: Option<ApprovalStatus>,
    ) -> anyhow::Result<Vec<CorrectionRequest>>;
}
