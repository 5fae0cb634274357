use crate::modules::attendance::adapters::outbound::ledger::{
    EntryReview, ReviewOutcome, TimeEntryLedger,
};
use crate::modules::attendance::core::ledger::TimeEntry;
use crate::shared::application::authorization::authorize_reviewer;
use crate::shared::application::bulk::BulkOutcome;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::primitives::{ApprovalStatus, round_money};
use crate::shared::infrastructure::directory::EmployeeDirectory;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::info;

/// Labor cost of one closed entry, rounded half-up to cents.
pub fn labor_cost(duration_minutes: i64, hourly_rate: Decimal) -> Decimal {
    round_money(Decimal::from(duration_minutes) * hourly_rate / Decimal::from(60))
}

pub struct ReviewTimeEntriesHandler {
    ledger: Arc<dyn TimeEntryLedger>,
    directory: Arc<dyn EmployeeDirectory>,
}

impl ReviewTimeEntriesHandler {
    pub fn new(ledger: Arc<dyn TimeEntryLedger>, directory: Arc<dyn EmployeeDirectory>) -> Self {
        Self { ledger, directory }
    }

    #[tracing::instrument(skip(self))]
    pub async fn approve(
        &self,
        entry_id: &str,
        reviewer_id: &str,
        now: DateTime<Utc>,
    ) -> Result<TimeEntry, ApplicationError> {
        self.review(entry_id, reviewer_id, ApprovalStatus::Approved, now)
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn reject(
        &self,
        entry_id: &str,
        reviewer_id: &str,
        now: DateTime<Utc>,
    ) -> Result<TimeEntry, ApplicationError> {
        self.review(entry_id, reviewer_id, ApprovalStatus::Rejected, now)
            .await
    }

    pub async fn bulk_review(
        &self,
        entry_ids: &[String],
        reviewer_id: &str,
        status: ApprovalStatus,
        now: DateTime<Utc>,
    ) -> BulkOutcome {
        let mut outcome = BulkOutcome::default();
        for entry_id in entry_ids {
            let result = self.review(entry_id, reviewer_id, status, now).await;
            outcome.record(entry_id, result);
        }
        info!(
            succeeded = outcome.successes.len(),
            failed = outcome.failures.len(),
            "bulk time entry review finished"
        );
        outcome
    }

    async fn review(
        &self,
        entry_id: &str,
        reviewer_id: &str,
        status: ApprovalStatus,
        now: DateTime<Utc>,
    ) -> Result<TimeEntry, ApplicationError> {
        let entry = self
            .ledger
            .get_time_entry(entry_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(format!("time entry {entry_id}")))?;
        let reviewer = self
            .directory
            .get_employee(reviewer_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(format!("employee {reviewer_id}")))?;
        let employee = self
            .directory
            .get_employee(&entry.employee_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(format!("employee {}", entry.employee_id)))?;
        authorize_reviewer(&reviewer, &employee)?;

        let labor_cost = match (status, entry.duration_minutes) {
            (ApprovalStatus::Approved, Some(minutes)) if entry.is_work() => {
                let rate = employee.hourly_rate.ok_or_else(|| {
                    ApplicationError::Validation(format!(
                        "employee {} has no hourly rate",
                        employee.id
                    ))
                })?;
                Some(labor_cost(minutes, rate))
            }
            _ => None,
        };

        let review = EntryReview {
            status,
            reviewer_id: reviewer.id,
            reviewed_at: now,
            labor_cost,
        };
        match self.ledger.record_review(entry_id, review).await? {
            ReviewOutcome::Recorded(entry) => Ok(entry),
            ReviewOutcome::NotReviewable(entry) if entry.is_open() => Err(
                ApplicationError::InvalidState(format!("time entry {entry_id} is still open")),
            ),
            ReviewOutcome::NotReviewable(_) => Err(ApplicationError::InvalidState(format!(
                "time entry {entry_id} was already reviewed"
            ))),
            ReviewOutcome::Missing => {
                Err(ApplicationError::NotFound(format!("time entry {entry_id}")))
            }
        }
    }
}
