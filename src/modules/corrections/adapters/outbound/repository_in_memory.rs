use crate::modules::corrections::adapters::outbound::repository::{
    CorrectionRepository, InsertOutcome, ResolveOutcome,
};
use crate::modules::corrections::core::request::{CorrectionRequest, Resolution};
use crate::shared::core::primitives::ApprovalStatus;
use anyhow::bail;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryCorrectionRepository {
    requests: RwLock<HashMap<String, CorrectionRequest>>,
    is_offline: bool,
}

impl InMemoryCorrectionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            bail!("Correction repository offline");
        }
        Ok(())
    }
}

#[async_trait]
impl CorrectionRepository for InMemoryCorrectionRepository {
    async fn insert_if_no_pending(
        &self,
        request: CorrectionRequest,
    ) -> anyhow::Result<InsertOutcome> {
        self.ensure_online()?;
        let mut requests = self.requests.write().await;
        let mut corrected_entry_id = None;
        for existing in requests
            .values()
            .filter(|r| r.time_entry_id == request.time_entry_id)
        {
            if existing.is_pending() {
                return Ok(InsertOutcome::PendingExists);
            }
            if existing.status == ApprovalStatus::Approved {
                corrected_entry_id = existing.corrected_entry_id.clone();
            }
        }
        if let Some(corrected_entry_id) = corrected_entry_id {
            return Ok(InsertOutcome::AlreadyCorrected(corrected_entry_id));
        }
        requests.insert(request.id.clone(), request);
        Ok(InsertOutcome::Inserted)
    }

    async fn get(&self, request_id: &str) -> anyhow::Result<Option<CorrectionRequest>> {
        self.ensure_online()?;
        Ok(self.requests.read().await.get(request_id).cloned())
    }

    async fn resolve_if_pending(
        &self,
        request_id: &str,
        resolution: Resolution,
    ) -> anyhow::Result<ResolveOutcome> {
        self.ensure_online()?;
        let mut requests = self.requests.write().await;
        let Some(request) = requests.get_mut(request_id) else {
            return Ok(ResolveOutcome::Missing);
        };
        if !request.is_pending() {
            return Ok(ResolveOutcome::NotPending(request.clone()));
        }
        request.status = resolution.status;
        request.reviewed_by = Some(resolution.reviewed_by);
        request.reviewed_at = Some(resolution.reviewed_at);
        request.reviewer_notes = resolution.reviewer_notes;
        request.corrected_entry_id = resolution.corrected_entry_id;
        Ok(ResolveOutcome::Resolved(request.clone()))
    }

    async fn reopen_if_approved(&self, request_id: &str) -> anyhow::Result<bool> {
        self.ensure_online()?;
        let mut requests = self.requests.write().await;
        let Some(request) = requests.get_mut(request_id) else {
            return Ok(false);
        };
        if request.status != ApprovalStatus::Approved {
            return Ok(false);
        }
        request.status = ApprovalStatus::Pending;
        request.reviewed_by = None;
        request.reviewed_at = None;
        request.reviewer_notes = None;
        request.corrected_entry_id = None;
        Ok(true)
    }

    async fn list(
        &self,
        organization_id: &str,
        status: Option<ApprovalStatus>,
    ) -> anyhow::Result<Vec<CorrectionRequest>> {
        self.ensure_online()?;
        let requests = self.requests.read().await;
        let mut matching: Vec<CorrectionRequest> = requests
            .values()
            .filter(|r| r.organization_id == organization_id)
            .filter(|r| status.is_none_or(|s| r.status == s))
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.requested_at.cmp(&b.requested_at));
        Ok(matching)
    }
}
