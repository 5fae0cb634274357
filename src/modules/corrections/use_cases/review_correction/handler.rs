use crate::modules::attendance::adapters::outbound::ledger::TimeEntryLedger;
use crate::modules::attendance::use_cases::review_time_entries::handler::labor_cost;
use crate::modules::corrections::adapters::outbound::repository::{
    CorrectionRepository, ResolveOutcome,
};
use crate::modules::corrections::core::decide::{corrected_entry, resolution};
use crate::modules::corrections::core::request::{CorrectionRejection, CorrectionRequest};
use crate::shared::application::authorization::authorize_reviewer;
use crate::shared::application::bulk::BulkOutcome;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::primitives::ApprovalStatus;
use crate::shared::infrastructure::directory::EmployeeDirectory;
use crate::shared::infrastructure::notification_sink::{
    Notification, NotificationSink, deliver_all,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewCorrection {
    pub request_id: String,
    pub reviewer_id: String,
    pub reviewer_notes: Option<String>,
    pub reviewed_at: DateTime<Utc>,
}

pub struct ReviewCorrectionHandler {
    repository: Arc<dyn CorrectionRepository>,
    ledger: Arc<dyn TimeEntryLedger>,
    directory: Arc<dyn EmployeeDirectory>,
    notifications: Arc<dyn NotificationSink>,
}

impl ReviewCorrectionHandler {
    pub fn new(
        repository: Arc<dyn CorrectionRepository>,
        ledger: Arc<dyn TimeEntryLedger>,
        directory: Arc<dyn EmployeeDirectory>,
        notifications: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            repository,
            ledger,
            directory,
            notifications,
        }
    }

    #[tracing::instrument(skip(self, review), fields(request_id = %review.request_id))]
    pub async fn approve(
        &self,
        review: ReviewCorrection,
    ) -> Result<CorrectionRequest, ApplicationError> {
        self.resolve(review, ApprovalStatus::Approved).await
    }

    #[tracing::instrument(skip(self, review), fields(request_id = %review.request_id))]
    pub async fn reject(
        &self,
        review: ReviewCorrection,
    ) -> Result<CorrectionRequest, ApplicationError> {
        self.resolve(review, ApprovalStatus::Rejected).await
    }

    pub async fn bulk_approve(
        &self,
        request_ids: &[String],
        reviewer_id: &str,
        reviewer_notes: Option<String>,
        reviewed_at: DateTime<Utc>,
    ) -> BulkOutcome {
        self.bulk(request_ids, reviewer_id, reviewer_notes, reviewed_at, ApprovalStatus::Approved)
            .await
    }

    pub async fn bulk_reject(
        &self,
        request_ids: &[String],
        reviewer_id: &str,
        reviewer_notes: Option<String>,
        reviewed_at: DateTime<Utc>,
    ) -> BulkOutcome {
        self.bulk(request_ids, reviewer_id, reviewer_notes, reviewed_at, ApprovalStatus::Rejected)
            .await
    }

    async fn bulk(
        &self,
        request_ids: &[String],
        reviewer_id: &str,
        reviewer_notes: Option<String>,
        reviewed_at: DateTime<Utc>,
        status: ApprovalStatus,
    ) -> BulkOutcome {
        let mut outcome = BulkOutcome::default();
        for request_id in request_ids {
            let review = ReviewCorrection {
                request_id: request_id.clone(),
                reviewer_id: reviewer_id.to_string(),
                reviewer_notes: reviewer_notes.clone(),
                reviewed_at,
            };
            outcome.record(request_id, self.resolve(review, status).await);
        }
        info!(
            %status,
            succeeded = outcome.successes.len(),
            failed = outcome.failures.len(),
            "bulk correction review finished"
        );
        outcome
    }

    async fn resolve(
        &self,
        review: ReviewCorrection,
        status: ApprovalStatus,
    ) -> Result<CorrectionRequest, ApplicationError> {
        let request = self
            .repository
            .get(&review.request_id)
            .await?
            .ok_or(CorrectionRejection::RequestNotFound)?;
        if !request.is_pending() {
            return Err(CorrectionRejection::AlreadyResolved.into());
        }

        let reviewer = self
            .directory
            .get_employee(&review.reviewer_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(format!("employee {}", review.reviewer_id)))?;
        let employee = self
            .directory
            .get_employee(&request.employee_id)
            .await?
            .ok_or_else(|| {
                ApplicationError::NotFound(format!("employee {}", request.employee_id))
            })?;
        authorize_reviewer(&reviewer, &employee)?;

        let corrected_entry_id = (status == ApprovalStatus::Approved)
            .then(|| format!("{}-{}", request.time_entry_id, Uuid::now_v7().simple()));
        let decided = resolution(
            status,
            &reviewer.id,
            review.reviewed_at,
            review.reviewer_notes,
            corrected_entry_id,
        );

        let replacement = match status {
            ApprovalStatus::Approved => {
                let original = self
                    .ledger
                    .get_time_entry(&request.time_entry_id)
                    .await?
                    .ok_or(CorrectionRejection::EntryNotFound)?;
                let mut entry = corrected_entry(&original, &request, &decided)?;
                entry.labor_cost = match (entry.duration_minutes, employee.hourly_rate) {
                    (Some(minutes), Some(rate)) if entry.is_work() => {
                        Some(labor_cost(minutes, rate))
                    }
                    _ => None,
                };
                Some(entry)
            }
            _ => None,
        };

        let resolved = match self
            .repository
            .resolve_if_pending(&request.id, decided)
            .await?
        {
            ResolveOutcome::Resolved(resolved) => resolved,
            ResolveOutcome::NotPending(_) => {
                return Err(CorrectionRejection::AlreadyResolved.into());
            }
            ResolveOutcome::Missing => return Err(CorrectionRejection::RequestNotFound.into()),
        };

        if let Some(entry) = replacement {
            if let Err(append_error) = self.ledger.append_time_entry(entry).await {
                error!(
                    request_id = %resolved.id,
                    error = %append_error,
                    "corrected entry not written, returning the request to pending"
                );
                if let Err(reopen_error) = self.repository.reopen_if_approved(&resolved.id).await {
                    error!(
                        request_id = %resolved.id,
                        error = %reopen_error,
                        "correction request left approved without a corrected entry"
                    );
                }
                return Err(ApplicationError::Backend(append_error.to_string()));
            }
        }

        info!(
            request_id = %resolved.id,
            time_entry_id = %resolved.time_entry_id,
            %status,
            "correction request resolved"
        );
        let message = format!(
            "Your correction request for time entry {} was {}",
            resolved.time_entry_id, status
        );
        deliver_all(
            self.notifications.as_ref(),
            vec![Notification::new(&resolved.employee_id, message)],
        )
        .await;

        Ok(resolved)
    }
}

#[cfg(test)]
mod review_correction_handler_tests {
    use super::*;
    use crate::modules::corrections::use_cases::submit_correction::command::SubmitCorrection;
    use crate::shared::application::errors::ErrorKind;
    use crate::shared::core::primitives::Role;
    use crate::tests::fixtures::ledger::FlakyLedger;
    use crate::tests::fixtures::time_entries::TimeEntryBuilder;
    use crate::tests::fixtures::{EmployeeBuilder, TestApp, at};
    use rstest::{fixture, rstest};
    use rust_decimal_macros::dec;

    #[fixture]
    async fn before_each() -> (TestApp, String) {
        let app = TestApp::with_employees(vec![
            EmployeeBuilder::new().build(),
            EmployeeBuilder::new().id("m-1").role(Role::Manager).build(),
            EmployeeBuilder::new()
                .id("m-2")
                .organization_id("org-2")
                .role(Role::Admin)
                .build(),
        ])
        .await;
        app.backends
            .ledger
            .append_time_entry(TimeEntryBuilder::new().id("t-1").between((9, 0), (17, 0)).build())
            .await
            .unwrap();
        let request = app
            .state
            .corrections
            .handle(SubmitCorrection {
                requester_id: "e-1".into(),
                time_entry_id: "t-1".into(),
                employee_reason: "closed the store".into(),
                proposed_clock_in: None,
                proposed_clock_out: Some(at(19, 0)),
                requested_at: at(19, 30),
            })
            .await
            .unwrap();
        (app, request.id)
    }

    fn review(request_id: &str, reviewer_id: &str) -> ReviewCorrection {
        ReviewCorrection {
            request_id: request_id.into(),
            reviewer_id: reviewer_id.into(),
            reviewer_notes: Some("ok".into()),
            reviewed_at: at(20, 0),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_write_a_superseding_entry_on_approval(
        #[future] before_each: (TestApp, String),
    ) {
        let (app, request_id) = before_each.await;
        let resolved = app
            .state
            .correction_reviews
            .approve(review(&request_id, "m-1"))
            .await
            .unwrap();
        assert_eq!(resolved.status, ApprovalStatus::Approved);
        assert_eq!(resolved.reviewed_by.as_deref(), Some("m-1"));

        let corrected_id = resolved.corrected_entry_id.unwrap();
        let corrected = app
            .backends
            .ledger
            .get_time_entry(&corrected_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(corrected.supersedes.as_deref(), Some("t-1"));
        assert_eq!(corrected.duration_minutes, Some(600));
        assert_eq!(corrected.labor_cost, Some(dec!(200.00)));

        let original = app.backends.ledger.get_time_entry("t-1").await.unwrap().unwrap();
        assert_eq!(original.clock_out, Some(at(17, 0)));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_the_request_to_pending_when_the_ledger_write_fails(
        #[future] before_each: (TestApp, String),
    ) {
        let (app, request_id) = before_each.await;
        let backends = &app.backends;
        let handler = ReviewCorrectionHandler::new(
            backends.corrections.clone(),
            Arc::new(FlakyLedger::failing_append(backends.ledger.clone(), 1)),
            backends.directory.clone(),
            backends.notifications.clone(),
        );

        let error = handler.approve(review(&request_id, "m-1")).await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Unavailable);
        let request = backends.corrections.get(&request_id).await.unwrap().unwrap();
        assert!(request.is_pending());
        assert_eq!(request.corrected_entry_id, None);
        assert!(backends.notifications.sent().await.is_empty());

        let retried = handler.approve(review(&request_id, "m-1")).await.unwrap();
        let corrected_id = retried.corrected_entry_id.unwrap();
        assert!(backends.ledger.get_time_entry(&corrected_id).await.unwrap().is_some());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_point_a_second_correction_at_the_corrected_entry(
        #[future] before_each: (TestApp, String),
    ) {
        let (app, request_id) = before_each.await;
        let approved = app
            .state
            .correction_reviews
            .approve(review(&request_id, "m-1"))
            .await
            .unwrap();
        let corrected_id = approved.corrected_entry_id.unwrap();

        let again = app
            .state
            .corrections
            .handle(SubmitCorrection {
                requester_id: "e-1".into(),
                time_entry_id: "t-1".into(),
                employee_reason: "left even later".into(),
                proposed_clock_in: None,
                proposed_clock_out: Some(at(20, 0)),
                requested_at: at(21, 0),
            })
            .await
            .unwrap_err();
        assert_eq!(again.kind(), ErrorKind::State);
        assert!(matches!(
            again,
            ApplicationError::Correction(CorrectionRejection::AlreadyCorrected { corrected_entry_id })
                if corrected_entry_id == corrected_id
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_a_second_decision(#[future] before_each: (TestApp, String)) {
        let (app, request_id) = before_each.await;
        let handler = &app.state.correction_reviews;
        handler.reject(review(&request_id, "m-1")).await.unwrap();
        let again = handler.approve(review(&request_id, "m-1")).await;
        assert!(matches!(
            again,
            Err(ApplicationError::Correction(CorrectionRejection::AlreadyResolved))
        ));
    }

    #[rstest]
    #[case("e-1")]
    #[case("m-2")]
    #[tokio::test]
    async fn it_should_forbid_unqualified_reviewers(
        #[future] before_each: (TestApp, String),
        #[case] reviewer_id: &str,
    ) {
        let (app, request_id) = before_each.await;
        let result = app
            .state
            .correction_reviews
            .approve(review(&request_id, reviewer_id))
            .await;
        assert!(matches!(result, Err(ApplicationError::Forbidden(_))));
        let request = app.backends.corrections.get(&request_id).await.unwrap().unwrap();
        assert!(request.is_pending());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_notify_the_employee(#[future] before_each: (TestApp, String)) {
        let (app, request_id) = before_each.await;
        app.state
            .correction_reviews
            .reject(review(&request_id, "m-1"))
            .await
            .unwrap();
        let sent = app.backends.notifications.sent().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].user_id, "e-1");
        assert!(sent[0].message.ends_with("was rejected"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_unknown_requests(#[future] before_each: (TestApp, String)) {
        let (app, _) = before_each.await;
        let result = app
            .state
            .correction_reviews
            .approve(review("c-404", "m-1"))
            .await;
        assert!(matches!(
            result,
            Err(ApplicationError::Correction(CorrectionRejection::RequestNotFound))
        ));
    }
}
