use crate::modules::attendance::adapters::outbound::ledger::TimeEntryLedger;
use crate::modules::attendance::core::state::{BreakType, SessionState};
use crate::modules::attendance::use_cases::check_clock_in_allowed::gate::GateRejection;
use crate::modules::attendance::use_cases::clock_tokens::token::{ClockTokenAction, TokenRejection};
use crate::modules::attendance::use_cases::record_clock_action::command::ClockAction;
use crate::modules::attendance::use_cases::record_clock_action::handler::ClockActionRequest;
use crate::modules::settings::core::attendance_settings::AttendanceSettingsPatch;
use crate::shared::application::errors::{ApplicationError, ErrorKind};
use crate::shell::http::router;
use crate::tests::fixtures::{EmployeeBuilder, TestApp, at, shift_between};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::Duration;
use http_body_util::BodyExt;
use tokio::join;
use tower::ServiceExt;

async fn send(app: &TestApp, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = router(app.state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

fn post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn it_should_run_a_working_day_over_http() {
    let app = TestApp::with_employees(vec![EmployeeBuilder::new().build()]).await;

    let (status, token) = send(
        &app,
        post(
            "/clock-tokens",
            serde_json::json!({ "employee_id": "e-1", "action": "clock_in" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let steps = [
        serde_json::json!({ "employee_id": "e-1", "action": "clock_in", "token_nonce": token["nonce"] }),
        serde_json::json!({ "employee_id": "e-1", "action": "start_break", "break_type": "coffee" }),
        serde_json::json!({ "employee_id": "e-1", "action": "resume_work" }),
        serde_json::json!({ "employee_id": "e-1", "action": "clock_out" }),
    ];
    let expected = ["working", "on_break", "working", "idle"];
    for (body, state) in steps.into_iter().zip(expected) {
        let (status, json) = send(&app, post("/clock-actions", body)).await;
        assert_eq!(status, StatusCode::OK, "{json}");
        assert_eq!(json["state"], state);
    }

    let (status, entries) = send(
        &app,
        Request::get("/time-entries?employee_id=e-1&sort_desc=false")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[1]["kind"], "break");
    assert!(entries.iter().all(|e| !e["clock_out"].is_null()));
}

#[tokio::test]
async fn it_should_let_exactly_one_of_three_concurrent_clock_ins_win() {
    let app = TestApp::with_employees(vec![EmployeeBuilder::new().build()]).await;
    app.backends.event_store.set_delay_append_ms(10);
    let mut requests = Vec::new();
    for _ in 0..3 {
        let token = app.issue_token("e-1", ClockTokenAction::ClockIn, at(9, 0)).await;
        requests.push(ClockActionRequest {
            employee_id: "e-1".into(),
            action: ClockAction::ClockIn,
            token_nonce: Some(token.nonce),
            assisted_by: None,
            occurred_at: at(9, 0),
            task_id: None,
        });
    }
    let handler = &app.state.clock_actions;
    let [a, b, c]: [ClockActionRequest; 3] = requests.try_into().unwrap();
    let (r1, r2, r3) = join!(handler.handle(a), handler.handle(b), handler.handle(c));
    let results = [r1, r2, r3];

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    for error in results.iter().filter_map(|r| r.as_ref().err()) {
        assert!(matches!(error.kind(), ErrorKind::Conflict | ErrorKind::State));
    }
    let entries = app
        .backends
        .ledger
        .query_entries(Some("e-1"), at(0, 0), at(23, 59))
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);
}

#[tokio::test]
async fn it_should_accept_a_token_at_most_once_under_concurrency() {
    let app = TestApp::with_employees(vec![EmployeeBuilder::new().build()]).await;
    let token = app.issue_token("e-1", ClockTokenAction::ClockIn, at(9, 0)).await;
    let service = app.state.clock_tokens.as_ref();
    let nonce = token.nonce.as_str();
    let validate = move || service.validate(nonce, "e-1", ClockTokenAction::ClockIn, at(9, 0));
    let (r1, r2, r3) = join!(validate(), validate(), validate());
    let accepted = [r1.is_ok(), r2.is_ok(), r3.is_ok()];
    assert_eq!(accepted.iter().filter(|ok| **ok).count(), 1);
}

#[tokio::test]
async fn it_should_expire_tokens_on_the_configured_window() {
    let app = TestApp::with_employees(vec![EmployeeBuilder::new().build()]).await;
    let service = &app.state.clock_tokens;
    let issued_at = at(9, 0);

    let stale = app.issue_token("e-1", ClockTokenAction::ClockIn, issued_at).await;
    let expired = service
        .validate(
            &stale.nonce,
            "e-1",
            ClockTokenAction::ClockIn,
            issued_at + Duration::seconds(46),
        )
        .await;
    assert!(matches!(
        expired,
        Err(ApplicationError::Token(TokenRejection::Expired))
    ));

    let fresh = app.issue_token("e-1", ClockTokenAction::ClockIn, issued_at).await;
    let just_in_time = issued_at + Duration::seconds(44);
    assert!(
        service
            .validate(&fresh.nonce, "e-1", ClockTokenAction::ClockIn, just_in_time)
            .await
            .is_ok()
    );
    let replay = service
        .validate(&fresh.nonce, "e-1", ClockTokenAction::ClockIn, just_in_time)
        .await;
    assert!(matches!(
        replay,
        Err(ApplicationError::Token(TokenRejection::AlreadyConsumed))
    ));
}

#[tokio::test]
async fn it_should_open_the_clock_in_window_fifteen_minutes_early() {
    let app = TestApp::with_employees(vec![EmployeeBuilder::new().build()]).await;
    app.patch_settings(AttendanceSettingsPatch {
        require_schedule_for_clock_in: Some(true),
        early_clock_in_grace_minutes: Some(15),
        ..Default::default()
    })
    .await;
    app.backends
        .directory
        .add_shift(shift_between("e-1", (9, 0), (17, 0)))
        .await;

    let too_early = app.clock_in("e-1", at(8, 44)).await;
    assert!(matches!(
        too_early,
        Err(ApplicationError::Schedule(GateRejection::TooEarly { .. }))
    ));
    let snapshot = app.clock_in("e-1", at(8, 46)).await.unwrap();
    assert_eq!(snapshot.state, SessionState::Working);
    assert!(!snapshot.clocked_in_late);
}

#[tokio::test]
async fn it_should_advise_a_meal_break_after_the_threshold() {
    let app = TestApp::with_employees(vec![EmployeeBuilder::new().build()]).await;
    app.clock_in("e-1", at(8, 0)).await.unwrap();

    let snapshot = app
        .state
        .sessions
        .handle("e-1", at(13, 30))
        .await
        .unwrap();
    assert!(snapshot.requires_meal_break);
    assert_eq!(snapshot.suggested_break_type, Some(BreakType::Lunch));

    app.clock(
        "e-1",
        ClockAction::StartBreak {
            break_type: BreakType::Coffee,
        },
        at(13, 30),
    )
    .await
    .unwrap();
    let sent = app.backends.notifications.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].user_id, "e-1");
}
