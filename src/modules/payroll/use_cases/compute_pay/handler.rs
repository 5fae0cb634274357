use crate::modules::attendance::adapters::outbound::ledger::TimeEntryLedger;
use crate::modules::payroll::core::pay::{PayPeriodSummary, compute_pay_by_day, daily_minutes};
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::primitives::DateRange;
use crate::shared::infrastructure::directory::EmployeeDirectory;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeePaySummary {
    pub employee_id: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub hourly_rate: Decimal,
    pub days_worked: usize,
    #[serde(flatten)]
    pub summary: PayPeriodSummary,
}

pub struct ComputePayHandler {
    ledger: Arc<dyn TimeEntryLedger>,
    directory: Arc<dyn EmployeeDirectory>,
}

impl ComputePayHandler {
    pub fn new(ledger: Arc<dyn TimeEntryLedger>, directory: Arc<dyn EmployeeDirectory>) -> Self {
        Self { ledger, directory }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(
        &self,
        employee_id: &str,
        range: DateRange,
    ) -> Result<EmployeePaySummary, ApplicationError> {
        let employee = self
            .directory
            .get_employee(employee_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(format!("employee {employee_id}")))?;
        let hourly_rate = employee.hourly_rate.ok_or_else(|| {
            ApplicationError::Validation(format!("employee {employee_id} has no hourly rate"))
        })?;

        // Supersession is resolved over the padded window, days are trimmed after.
        let (from, to) = range.padded_utc_bounds();
        let entries = self
            .ledger
            .query_entries(Some(employee_id), from, to)
            .await?;
        let mut days = daily_minutes(&entries, employee.timezone());
        days.retain(|date, _| range.contains(*date));
        let summary = compute_pay_by_day(&days, hourly_rate)?;

        info!(
            employee_id,
            days = days.len(),
            total_pay = %summary.total_pay,
            "pay summary computed"
        );
        Ok(EmployeePaySummary {
            employee_id: employee.id,
            from: range.from,
            to: range.to,
            hourly_rate,
            days_worked: days.len(),
            summary,
        })
    }
}
