use crate::modules::attendance::adapters::outbound::ledger::TimeEntryLedger;
use crate::modules::corrections::adapters::outbound::repository::{
    CorrectionRepository, InsertOutcome,
};
use crate::modules::corrections::core::decide::decide_submission;
use crate::modules::corrections::core::request::{CorrectionRejection, CorrectionRequest};
use crate::modules::corrections::use_cases::submit_correction::command::SubmitCorrection;
use crate::shared::application::errors::ApplicationError;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

pub struct SubmitCorrectionHandler {
    ledger: Arc<dyn TimeEntryLedger>,
    repository: Arc<dyn CorrectionRepository>,
}

impl SubmitCorrectionHandler {
    pub fn new(
        ledger: Arc<dyn TimeEntryLedger>,
        repository: Arc<dyn CorrectionRepository>,
    ) -> Self {
        Self { ledger, repository }
    }

    #[tracing::instrument(skip(self, command), fields(time_entry_id = %command.time_entry_id))]
    pub async fn handle(
        &self,
        command: SubmitCorrection,
    ) -> Result<CorrectionRequest, ApplicationError> {
        let entry = self.ledger.get_time_entry(&command.time_entry_id).await?;
        let request = decide_submission(entry.as_ref(), command, Uuid::now_v7().to_string())?;

        match self.repository.insert_if_no_pending(request.clone()).await? {
            InsertOutcome::Inserted => {
                info!(request_id = %request.id, "correction request submitted");
                Ok(request)
            }
            InsertOutcome::PendingExists => Err(CorrectionRejection::AlreadyPending.into()),
            InsertOutcome::AlreadyCorrected(corrected_entry_id) => {
                Err(CorrectionRejection::AlreadyCorrected { corrected_entry_id }.into())
            }
        }
    }
}
