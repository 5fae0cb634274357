// Shared test fixtures, compiled into the crate only under cfg(test).

pub mod commands;
pub mod events;
pub mod ledger;
pub mod time_entries;

use crate::modules::attendance::core::snapshot::SessionSnapshot;
use crate::modules::attendance::use_cases::clock_tokens::service::IssueClockToken;
use crate::modules::attendance::use_cases::clock_tokens::token::{ClockToken, ClockTokenAction};
use crate::modules::attendance::use_cases::record_clock_action::command::ClockAction;
use crate::modules::attendance::use_cases::record_clock_action::handler::ClockActionRequest;
use crate::modules::attendance::adapters::outbound::clock_token_cache::MokaClockTokenStore;
use crate::modules::attendance::adapters::outbound::ledger_in_memory::InMemoryLedger;
use crate::modules::corrections::adapters::outbound::repository_in_memory::InMemoryCorrectionRepository;
use crate::modules::payroll::adapters::outbound::sick_leave_in_memory::InMemorySickLeaveRepository;
use crate::modules::settings::adapters::outbound::settings_store::InMemorySettingsStore;
use crate::modules::settings::core::attendance_settings::AttendanceSettingsPatch;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::primitives::Role;
use crate::shared::infrastructure::directory::in_memory::InMemoryDirectory;
use crate::shared::infrastructure::directory::{Employee, ShiftSchedule};
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::notification_sink::in_memory::InMemoryNotificationSink;
use crate::shell::state::{AppState, InMemoryBackends};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

/// The fixed calendar day every fixture lives on.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    today()
        .and_time(NaiveTime::from_hms_opt(hour, minute, 0).unwrap())
        .and_utc()
}

pub fn shift_between(employee_id: &str, start: (u32, u32), end: (u32, u32)) -> ShiftSchedule {
    ShiftSchedule {
        id: format!("shift-{employee_id}-{:02}{:02}", start.0, start.1),
        employee_id: employee_id.to_string(),
        date: today(),
        scheduled_start: at(start.0, start.1),
        scheduled_end: at(end.0, end.1),
    }
}

pub struct EmployeeBuilder {
    inner: Employee,
}

impl EmployeeBuilder {
    pub fn new() -> Self {
        Self {
            inner: Employee {
                id: "e-1".to_string(),
                organization_id: "org-1".to_string(),
                name: "Erin Employee".to_string(),
                hourly_rate: Some(dec!(20)),
                utc_offset_minutes: 0,
                role: Role::Employee,
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn organization_id(mut self, v: impl Into<String>) -> Self {
        self.inner.organization_id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn role(mut self, v: Role) -> Self {
        self.inner.role = v;
        self
    }

    pub fn hourly_rate(mut self, v: Decimal) -> Self {
        self.inner.hourly_rate = Some(v);
        self
    }

    pub fn no_hourly_rate(mut self) -> Self {
        self.inner.hourly_rate = None;
        self
    }

    pub fn utc_offset_minutes(mut self, v: i32) -> Self {
        self.inner.utc_offset_minutes = v;
        self
    }

    pub fn build(self) -> Employee {
        self.inner
    }
}

/// Fully wired application over in-memory backends.
pub struct TestApp {
    pub state: AppState,
    pub backends: InMemoryBackends,
}

#[derive(Default)]
pub struct TestAppBuilder {
    employees: Vec<Employee>,
    notifications_offline: bool,
    event_store_offline: bool,
}

impl TestAppBuilder {
    pub fn employees(mut self, employees: Vec<Employee>) -> Self {
        self.employees = employees;
        self
    }

    pub fn notifications_offline(mut self) -> Self {
        self.notifications_offline = true;
        self
    }

    pub fn event_store_offline(mut self) -> Self {
        self.event_store_offline = true;
        self
    }

    pub async fn build(self) -> TestApp {
        let mut event_store = InMemoryEventStore::new();
        if self.event_store_offline {
            event_store.toggle_offline();
        }
        let mut notifications = InMemoryNotificationSink::new();
        if self.notifications_offline {
            notifications.toggle_offline();
        }
        let backends = InMemoryBackends {
            event_store: Arc::new(event_store),
            ledger: Arc::new(InMemoryLedger::new()),
            directory: Arc::new(InMemoryDirectory::new()),
            settings: Arc::new(InMemorySettingsStore::new()),
            corrections: Arc::new(InMemoryCorrectionRepository::new()),
            sick_leave: Arc::new(InMemorySickLeaveRepository::new()),
            notifications: Arc::new(notifications),
            tokens: Arc::new(MokaClockTokenStore::new(1_000)),
        };
        for employee in self.employees {
            backends.directory.upsert_employee(employee).await;
        }
        TestApp {
            state: AppState::from_backends(&backends),
            backends,
        }
    }
}

impl TestApp {
    pub fn builder() -> TestAppBuilder {
        TestAppBuilder::default()
    }

    pub async fn new() -> Self {
        Self::builder().build().await
    }

    pub async fn with_employees(employees: Vec<Employee>) -> Self {
        Self::builder().employees(employees).build().await
    }

    /// Issues a self-service token for `employee_id`.
    pub async fn issue_token(
        &self,
        employee_id: &str,
        action: ClockTokenAction,
        now: DateTime<Utc>,
    ) -> ClockToken {
        self.state
            .clock_tokens
            .issue(IssueClockToken {
                employee_id: employee_id.to_string(),
                action,
                requested_by: None,
                now,
            })
            .await
            .unwrap()
    }

    pub async fn clock_in(
        &self,
        employee_id: &str,
        now: DateTime<Utc>,
    ) -> Result<SessionSnapshot, ApplicationError> {
        let token = self
            .issue_token(employee_id, ClockTokenAction::ClockIn, now)
            .await;
        self.state
            .clock_actions
            .handle(ClockActionRequest {
                employee_id: employee_id.to_string(),
                action: ClockAction::ClockIn,
                token_nonce: Some(token.nonce),
                assisted_by: None,
                occurred_at: now,
                task_id: None,
            })
            .await
    }

    pub async fn clock(
        &self,
        employee_id: &str,
        action: ClockAction,
        now: DateTime<Utc>,
    ) -> Result<SessionSnapshot, ApplicationError> {
        self.state
            .clock_actions
            .handle(ClockActionRequest {
                employee_id: employee_id.to_string(),
                action,
                token_nonce: None,
                assisted_by: None,
                occurred_at: now,
                task_id: None,
            })
            .await
    }

    /// Patches the settings of `org-1`.
    pub async fn patch_settings(&self, patch: AttendanceSettingsPatch) {
        self.state.settings.handle("org-1", patch).await.unwrap();
    }
}
