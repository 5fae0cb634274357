use crate::modules::payroll::adapters::outbound::sick_leave_repository::SickLeaveRepository;
use crate::modules::payroll::core::sick_leave::roll_forward;
use crate::shared::application::errors::ApplicationError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CarryoverReport {
    pub from_year: i32,
    pub carried: Vec<String>,
    pub already_present: Vec<String>,
    pub non_compliant: Vec<String>,
}

pub struct YearEndCarryoverHandler {
    repository: Arc<dyn SickLeaveRepository>,
}

impl YearEndCarryoverHandler {
    pub fn new(repository: Arc<dyn SickLeaveRepository>) -> Self {
        Self { repository }
    }

    /// Rolls every balance of `from_year` into `from_year + 1`. Employees that
    /// already have a balance for the target year are left untouched.
    #[tracing::instrument(skip(self))]
    pub async fn handle(
        &self,
        from_year: i32,
        now: DateTime<Utc>,
    ) -> Result<CarryoverReport, ApplicationError> {
        let mut report = CarryoverReport {
            from_year,
            ..CarryoverReport::default()
        };
        for balance in self.repository.balances_for_year(from_year).await? {
            if !balance.is_compliant() {
                warn!(
                    employee_id = %balance.employee_id,
                    total_hours = %balance.total_hours,
                    used_hours = %balance.used_hours,
                    "non-compliant sick leave balance skipped"
                );
                report.non_compliant.push(balance.employee_id);
                continue;
            }
            let (next, history) = roll_forward(&balance, now);
            if self.repository.insert_if_absent(next, history).await? {
                report.carried.push(balance.employee_id);
            } else {
                debug!(employee_id = %balance.employee_id, "carryover already applied");
                report.already_present.push(balance.employee_id);
            }
        }
        info!(
            from_year,
            carried = report.carried.len(),
            already_present = report.already_present.len(),
            non_compliant = report.non_compliant.len(),
            "year-end carryover finished"
        );
        Ok(report)
    }
}
