use crate::modules::attendance::adapters::outbound::intent_dispatch::dispatch_intents;
use crate::modules::attendance::adapters::outbound::ledger::{TimeEntryLedger, WatermarkRepository};
use crate::modules::attendance::adapters::outbound::session_streams::load_current_session;
use crate::modules::attendance::core::events::AttendanceEvent;
use crate::modules::attendance::core::evolve::evolve;
use crate::modules::attendance::core::snapshot::SessionSnapshot;
use crate::modules::attendance::use_cases::check_clock_in_allowed::handler::ClockInGate;
use crate::modules::attendance::use_cases::clock_tokens::service::ClockTokenService;
use crate::modules::attendance::use_cases::clock_tokens::token::ClockTokenAction;
use crate::modules::attendance::use_cases::project_ledger::handler::Projector;
use crate::modules::attendance::use_cases::record_clock_action::command::{
    ClockAction, RecordClockAction,
};
use crate::modules::attendance::use_cases::record_clock_action::decide::{
    decide_clock_action, permits,
};
use crate::modules::attendance::use_cases::record_clock_action::decision::Decision;
use crate::modules::settings::adapters::outbound::settings_store::SettingsStore;
use crate::modules::settings::core::attendance_settings::AttendanceSettings;
use crate::shared::application::authorization::authorize_reviewer;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::primitives::local_date;
use crate::shared::infrastructure::directory::{Employee, EmployeeDirectory};
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use crate::shared::infrastructure::notification_sink::NotificationSink;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

/// A clock action as submitted by a kiosk, the mobile app or a manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockActionRequest {
    pub employee_id: String,
    pub action: ClockAction,
    pub token_nonce: Option<String>,
    pub assisted_by: Option<String>,
    pub occurred_at: DateTime<Utc>,
    /// Task the clock-in is recorded against.
    pub task_id: Option<String>,
}

pub struct RecordClockActionHandler<TEventStore, TLedger>
where
    TEventStore: EventStore<AttendanceEvent> + Send + Sync + 'static,
    TLedger: TimeEntryLedger + WatermarkRepository + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
    projector: Projector<TLedger, TLedger>,
    directory: Arc<dyn EmployeeDirectory>,
    settings: Arc<dyn SettingsStore>,
    gate: ClockInGate,
    tokens: Arc<ClockTokenService>,
    notifications: Arc<dyn NotificationSink>,
}

impl<TEventStore, TLedger> RecordClockActionHandler<TEventStore, TLedger>
where
    TEventStore: EventStore<AttendanceEvent> + Send + Sync + 'static,
    TLedger: TimeEntryLedger + WatermarkRepository + Send + Sync + 'static,
{
    pub fn new(
        event_store: Arc<TEventStore>,
        projector: Projector<TLedger, TLedger>,
        directory: Arc<dyn EmployeeDirectory>,
        settings: Arc<dyn SettingsStore>,
        gate: ClockInGate,
        tokens: Arc<ClockTokenService>,
        notifications: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            event_store,
            projector,
            directory,
            settings,
            gate,
            tokens,
            notifications,
        }
    }

    /// Order matters: the state check runs before the gate and the token so
    /// an invalid transition never burns a token. A token consumed for an
    /// action that is then not recorded is released again.
    #[tracing::instrument(
        skip(self, request),
        fields(employee_id = %request.employee_id, action = %request.action)
    )]
    pub async fn handle(
        &self,
        request: ClockActionRequest,
    ) -> Result<SessionSnapshot, ApplicationError> {
        let employee = self
            .directory
            .get_employee(&request.employee_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(format!("employee {}", request.employee_id)))?;
        let settings = self.settings.get_settings(&employee.organization_id).await?;

        let assisted_by = match request.assisted_by.as_deref() {
            Some(manager_id) => Some(
                self.authorize_assistant(&employee, &settings, manager_id)
                    .await?,
            ),
            None => None,
        };

        let today = local_date(request.occurred_at, employee.timezone());
        let loaded = load_current_session(&*self.event_store, &employee.id, today).await?;
        permits(loaded.session.state, request.action)?;

        let clearance = match request.action {
            ClockAction::ClockIn => Some(
                self.gate
                    .check(
                        &employee,
                        &settings,
                        request.occurred_at,
                        assisted_by.as_deref(),
                    )
                    .await?,
            ),
            _ => None,
        };

        let consumed_nonce = self.verify_token(&employee, &settings, &request).await?;

        let command = RecordClockAction {
            employee_id: employee.id.clone(),
            organization_id: employee.organization_id.clone(),
            date: loaded.date,
            action: request.action,
            occurred_at: request.occurred_at,
            next_entry_id: Uuid::now_v7().to_string(),
            clearance,
            meal_break_threshold_minutes: settings.meal_break_threshold_minutes,
            task_id: request.task_id.clone(),
        };

        match decide_clock_action(&loaded.session, command) {
            Decision::Accepted { events, intents } => {
                if let Err(append_error) = self
                    .event_store
                    .append(&loaded.stream_id, loaded.version, &events)
                    .await
                {
                    if let EventStoreError::VersionMismatch { .. } = append_error {
                        warn!(stream_id = %loaded.stream_id, "concurrent clock action lost the race");
                    }
                    self.release_token(consumed_nonce.as_deref()).await;
                    return Err(append_error.into());
                }

                let mut stream = loaded.events;
                stream.extend(events.iter().cloned());
                if let Err(error) = self.projector.catch_up(&loaded.stream_id, &stream).await {
                    error!(
                        stream_id = %loaded.stream_id,
                        %error,
                        "ledger projection behind, it resumes on the next action for this session"
                    );
                }

                let session = events.into_iter().fold(loaded.session, evolve);
                dispatch_intents(&*self.notifications, intents).await;
                info!(state = %session.state, "clock action recorded");
                Ok(SessionSnapshot::capture(
                    &session,
                    &employee.id,
                    request.occurred_at,
                    settings.meal_break_threshold_minutes,
                ))
            }
            Decision::Rejected { reason } => {
                self.release_token(consumed_nonce.as_deref()).await;
                Err(reason.into())
            }
        }
    }

    async fn release_token(&self, nonce: Option<&str>) {
        if let Some(nonce) = nonce {
            self.tokens.release(nonce).await;
        }
    }

    async fn authorize_assistant(
        &self,
        employee: &Employee,
        settings: &AttendanceSettings,
        manager_id: &str,
    ) -> Result<String, ApplicationError> {
        if !settings.allow_manager_assisted {
            return Err(ApplicationError::Forbidden(
                "manager assisted clock actions are disabled for this organization".into(),
            ));
        }
        let manager = self
            .directory
            .get_employee(manager_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(format!("employee {manager_id}")))?;
        authorize_reviewer(&manager, employee)?;
        Ok(manager.id)
    }

    async fn verify_token(
        &self,
        employee: &Employee,
        settings: &AttendanceSettings,
        request: &ClockActionRequest,
    ) -> Result<Option<String>, ApplicationError> {
        let required = match request.action {
            ClockAction::ClockIn => Some(ClockTokenAction::ClockIn),
            ClockAction::ClockOut if settings.require_token_for_clock_out => {
                Some(ClockTokenAction::ClockOut)
            }
            _ => None,
        };
        let Some(token_action) = required else {
            return Ok(None);
        };
        let nonce = request.token_nonce.as_deref().ok_or_else(|| {
            ApplicationError::Validation(format!("a clock token is required to {}", request.action))
        })?;
        self.tokens
            .validate(nonce, &employee.id, token_action, request.occurred_at)
            .await?;
        Ok(Some(nonce.to_string()))
    }
}
