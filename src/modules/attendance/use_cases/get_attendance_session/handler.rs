use crate::modules::attendance::adapters::outbound::session_streams::load_current_session;
use crate::modules::attendance::core::events::AttendanceEvent;
use crate::modules::attendance::core::snapshot::SessionSnapshot;
use crate::modules::settings::adapters::outbound::settings_store::SettingsStore;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::primitives::local_date;
use crate::shared::infrastructure::directory::EmployeeDirectory;
use crate::shared::infrastructure::event_store::EventStore;
use chrono::{DateTime, Utc};
use std::sync::Arc;

pub struct GetAttendanceSessionHandler<TEventStore>
where
    TEventStore: EventStore<AttendanceEvent> + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
    directory: Arc<dyn EmployeeDirectory>,
    settings: Arc<dyn SettingsStore>,
}

impl<TEventStore> GetAttendanceSessionHandler<TEventStore>
where
    TEventStore: EventStore<AttendanceEvent> + Send + Sync + 'static,
{
    pub fn new(
        event_store: Arc<TEventStore>,
        directory: Arc<dyn EmployeeDirectory>,
        settings: Arc<dyn SettingsStore>,
    ) -> Self {
        Self {
            event_store,
            directory,
            settings,
        }
    }

    pub async fn handle(
        &self,
        employee_id: &str,
        now: DateTime<Utc>,
    ) -> Result<SessionSnapshot, ApplicationError> {
        let employee = self
            .directory
            .get_employee(employee_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(format!("employee {employee_id}")))?;
        let settings = self.settings.get_settings(&employee.organization_id).await?;
        let today = local_date(now, employee.timezone());
        let loaded = load_current_session(&*self.event_store, &employee.id, today).await?;
        Ok(SessionSnapshot::capture(
            &loaded.session,
            &employee.id,
            now,
            settings.meal_break_threshold_minutes,
        ))
    }
}
