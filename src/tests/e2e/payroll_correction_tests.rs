use crate::modules::attendance::adapters::outbound::ledger::TimeEntryLedger;
use crate::modules::attendance::use_cases::record_clock_action::command::ClockAction;
use crate::modules::corrections::adapters::outbound::repository::CorrectionRepository;
use crate::modules::corrections::core::request::CorrectionRequest;
use crate::modules::corrections::use_cases::review_correction::handler::ReviewCorrection;
use crate::modules::corrections::use_cases::submit_correction::command::SubmitCorrection;
use crate::modules::payroll::adapters::outbound::sick_leave_repository::SickLeaveRepository;
use crate::modules::payroll::core::pay::compute_pay;
use crate::modules::payroll::core::sick_leave::{SickLeaveBalance, carryover};
use crate::shared::application::errors::ErrorKind;
use crate::shared::core::primitives::{ApprovalStatus, DateRange, Role};
use crate::tests::fixtures::time_entries::TimeEntryBuilder;
use crate::tests::fixtures::{EmployeeBuilder, TestApp, at, today};
use chrono::{DateTime, Utc};
use rstest::{fixture, rstest};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[fixture]
async fn before_each() -> TestApp {
    TestApp::with_employees(vec![
        EmployeeBuilder::new().build(),
        EmployeeBuilder::new().id("m-1").role(Role::Manager).build(),
    ])
    .await
}

async fn submit(
    app: &TestApp,
    time_entry_id: &str,
    proposed_clock_out: DateTime<Utc>,
) -> CorrectionRequest {
    app.state
        .corrections
        .handle(SubmitCorrection {
            requester_id: "e-1".into(),
            time_entry_id: time_entry_id.into(),
            employee_reason: "forgot to clock out".into(),
            proposed_clock_in: None,
            proposed_clock_out: Some(proposed_clock_out),
            requested_at: at(20, 0),
        })
        .await
        .unwrap()
}

fn review(request_id: &str) -> ReviewCorrection {
    ReviewCorrection {
        request_id: request_id.into(),
        reviewer_id: "m-1".into(),
        reviewer_notes: None,
        reviewed_at: at(21, 0),
    }
}

#[rstest]
#[case(480, Decimal::ZERO, dec!(0.00))]
#[case(481, Decimal::ONE / Decimal::from(60), dec!(0.50))]
fn it_should_start_overtime_after_exactly_eight_hours(
    #[case] minutes: i64,
    #[case] overtime_hours: Decimal,
    #[case] overtime_pay: Decimal,
) {
    let mut entry = TimeEntryBuilder::new().build();
    entry.duration_minutes = Some(minutes);
    let summary = compute_pay(&[entry], dec!(20)).unwrap();
    assert_eq!(summary.regular_hours, dec!(8.00));
    assert_eq!(summary.overtime_hours, overtime_hours);
    assert_eq!(summary.overtime_pay, overtime_pay);
}

#[rstest]
#[tokio::test]
async fn it_should_pay_the_corrected_duration_after_approval(#[future] before_each: TestApp) {
    let app = before_each.await;
    let clocked_in = app.clock_in("e-1", at(9, 0)).await.unwrap();
    app.clock("e-1", ClockAction::ClockOut, at(15, 0))
        .await
        .unwrap();
    let entry_id = clocked_in.open_entry_id.unwrap();

    let range = DateRange::single(today());
    let before = app.state.payroll.handle("e-1", range).await.unwrap();
    assert_eq!(before.summary.total_pay, dec!(120.00));

    let request = submit(&app, &entry_id, at(17, 0)).await;
    app.state
        .correction_reviews
        .approve(review(&request.id))
        .await
        .unwrap();

    let after = app.state.payroll.handle("e-1", range).await.unwrap();
    assert_eq!(after.summary.regular_hours, dec!(8.00));
    assert_eq!(after.summary.total_pay, dec!(160.00));

    let original = app
        .backends
        .ledger
        .get_time_entry(&entry_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(original.duration_minutes, Some(360));
}

#[rstest]
#[tokio::test]
async fn it_should_pay_a_twice_corrected_entry_once(#[future] before_each: TestApp) {
    let app = before_each.await;
    app.backends
        .ledger
        .append_time_entry(TimeEntryBuilder::new().id("t-1").between((9, 0), (15, 0)).build())
        .await
        .unwrap();
    let first = submit(&app, "t-1", at(16, 0)).await;
    let first = app
        .state
        .correction_reviews
        .approve(review(&first.id))
        .await
        .unwrap();
    let corrected_id = first.corrected_entry_id.unwrap();

    let retarget = app
        .state
        .corrections
        .handle(SubmitCorrection {
            requester_id: "e-1".into(),
            time_entry_id: "t-1".into(),
            employee_reason: "left at five".into(),
            proposed_clock_in: None,
            proposed_clock_out: Some(at(17, 0)),
            requested_at: at(20, 0),
        })
        .await
        .unwrap_err();
    assert!(retarget.to_string().contains(&corrected_id));

    let second = submit(&app, &corrected_id, at(17, 0)).await;
    app.state
        .correction_reviews
        .approve(review(&second.id))
        .await
        .unwrap();

    let pay = app
        .state
        .payroll
        .handle("e-1", DateRange::single(today()))
        .await
        .unwrap();
    assert_eq!(pay.summary.regular_hours, dec!(8));
    assert_eq!(pay.summary.overtime_hours, Decimal::ZERO);
    assert_eq!(pay.summary.total_pay, dec!(160.00));
}

#[rstest]
#[tokio::test]
async fn it_should_ignore_a_rejected_correction_in_pay(#[future] before_each: TestApp) {
    let app = before_each.await;
    app.backends
        .ledger
        .append_time_entry(TimeEntryBuilder::new().id("t-1").between((9, 0), (15, 0)).build())
        .await
        .unwrap();
    let request = submit(&app, "t-1", at(17, 0)).await;
    app.state
        .correction_reviews
        .reject(review(&request.id))
        .await
        .unwrap();

    let pay = app
        .state
        .payroll
        .handle("e-1", DateRange::single(today()))
        .await
        .unwrap();
    assert_eq!(pay.summary.total_pay, dec!(120.00));
}

#[rstest]
#[tokio::test]
async fn it_should_report_partial_success_for_a_bulk_approval(#[future] before_each: TestApp) {
    let app = before_each.await;
    let mut request_ids = Vec::new();
    for (id, start) in [("t-1", 6), ("t-2", 10), ("t-3", 14)] {
        app.backends
            .ledger
            .append_time_entry(
                TimeEntryBuilder::new()
                    .id(id)
                    .between((start, 0), (start + 3, 0))
                    .build(),
            )
            .await
            .unwrap();
        request_ids.push(submit(&app, id, at(start + 4, 0)).await.id);
    }
    app.state
        .correction_reviews
        .reject(review(&request_ids[1]))
        .await
        .unwrap();

    let outcome = app
        .state
        .correction_reviews
        .bulk_approve(&request_ids, "m-1", Some("ok".into()), at(22, 0))
        .await;

    assert_eq!(outcome.successes, vec![request_ids[0].clone(), request_ids[2].clone()]);
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].id, request_ids[1]);
    assert_eq!(outcome.failures[0].kind, ErrorKind::State);

    let approved = app
        .backends
        .corrections
        .list("org-1", Some(ApprovalStatus::Approved))
        .await
        .unwrap();
    assert_eq!(approved.len(), 2);
    for request in approved {
        let corrected_id = request.corrected_entry_id.unwrap();
        assert!(
            app.backends
                .ledger
                .get_time_entry(&corrected_id)
                .await
                .unwrap()
                .is_some()
        );
    }
}

#[rstest]
fn it_should_cap_the_carryover_at_forty_and_the_total_at_eighty() {
    let result = carryover(&SickLeaveBalance::new("e-1", "org-1", 2024, dec!(50), dec!(0)));
    assert_eq!(result.carryover_hours, dec!(40));
    assert_eq!(result.next_year_total, dec!(80));
}

#[rstest]
#[tokio::test]
async fn it_should_write_one_balance_when_the_carryover_runs_twice(
    #[future] before_each: TestApp,
) {
    let app = before_each.await;
    app.backends
        .sick_leave
        .insert_if_absent(
            SickLeaveBalance::new("e-1", "org-1", 2024, dec!(50), dec!(0)),
            vec![],
        )
        .await
        .unwrap();

    app.state.carryover.handle(2024, at(0, 0)).await.unwrap();
    app.state.carryover.handle(2024, at(0, 5)).await.unwrap();

    let balances = app.backends.sick_leave.balances_for_year(2025).await.unwrap();
    assert_eq!(balances.len(), 1);
    assert_eq!(balances[0].total_hours, dec!(80));
    assert_eq!(balances[0].carryover_from_previous_year, dec!(40));
}
