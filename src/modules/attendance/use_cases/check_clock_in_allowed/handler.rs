use crate::modules::attendance::use_cases::check_clock_in_allowed::gate::{
    GateClearance, check_clock_in_allowed,
};
use crate::modules::settings::core::attendance_settings::AttendanceSettings;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::primitives::local_date;
use crate::shared::infrastructure::directory::{Employee, ScheduleLookup};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

pub struct ClockInGate {
    schedules: Arc<dyn ScheduleLookup>,
}

impl ClockInGate {
    pub fn new(schedules: Arc<dyn ScheduleLookup>) -> Self {
        Self { schedules }
    }

    pub async fn check(
        &self,
        employee: &Employee,
        settings: &AttendanceSettings,
        now: DateTime<Utc>,
        assisted_by: Option<&str>,
    ) -> Result<GateClearance, ApplicationError> {
        let today = local_date(now, employee.timezone());
        let shifts = self.schedules.shifts_on(&employee.id, today).await?;
        let clearance = check_clock_in_allowed(settings, &shifts, now, assisted_by)?;
        if let Some(manager_id) = clearance.assisted_by.as_deref() {
            info!(
                employee_id = %employee.id,
                manager_id,
                within_window = clearance.within_window,
                "manager assisted clock-in"
            );
        }
        Ok(clearance)
    }
}
