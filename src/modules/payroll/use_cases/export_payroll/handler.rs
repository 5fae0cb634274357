use crate::modules::attendance::adapters::outbound::ledger::TimeEntryLedger;
use crate::modules::attendance::core::ledger::TimeEntry;
use crate::modules::payroll::core::pay::{MinuteSplit, OVERTIME_MULTIPLIER, hours, payable_entries};
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::primitives::{ApprovalStatus, DateRange, local_date, round_money};
use crate::shared::infrastructure::directory::{Employee, EmployeeDirectory};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExportFilter {
    pub organization_id: Option<String>,
    #[serde(default)]
    pub approved_only: bool,
    #[serde(default = "include_pending_by_default")]
    pub include_pending: bool,
}

fn include_pending_by_default() -> bool {
    true
}

impl Default for ExportFilter {
    fn default() -> Self {
        Self {
            organization_id: None,
            approved_only: false,
            include_pending: true,
        }
    }
}

impl ExportFilter {
    fn admits(&self, status: ApprovalStatus) -> bool {
        match status {
            ApprovalStatus::Approved => true,
            ApprovalStatus::Pending => self.include_pending && !self.approved_only,
            ApprovalStatus::Rejected => false,
        }
    }
}

/// One line of the payroll sheet. Rate and pay are absent when the employee
/// has no hourly rate on file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayrollExportRow {
    pub employee_id: String,
    pub employee_name: String,
    pub date: NaiveDate,
    pub time_entry_id: String,
    pub clock_in: DateTime<Utc>,
    pub clock_out: Option<DateTime<Utc>>,
    pub regular_hours: Decimal,
    pub overtime_hours: Decimal,
    pub hourly_rate: Option<Decimal>,
    pub pay: Option<Decimal>,
    pub approval_status: ApprovalStatus,
}

pub struct ExportPayrollHandler {
    ledger: Arc<dyn TimeEntryLedger>,
    directory: Arc<dyn EmployeeDirectory>,
}

impl ExportPayrollHandler {
    pub fn new(ledger: Arc<dyn TimeEntryLedger>, directory: Arc<dyn EmployeeDirectory>) -> Self {
        Self { ledger, directory }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(
        &self,
        range: DateRange,
        filter: ExportFilter,
    ) -> Result<Vec<PayrollExportRow>, ApplicationError> {
        let (from, to) = range.padded_utc_bounds();
        let entries = self.ledger.query_entries(None, from, to).await?;

        let mut by_employee: BTreeMap<String, Vec<TimeEntry>> = BTreeMap::new();
        for entry in entries {
            let in_org = filter
                .organization_id
                .as_ref()
                .is_none_or(|org| *org == entry.organization_id);
            if in_org {
                by_employee
                    .entry(entry.employee_id.clone())
                    .or_default()
                    .push(entry);
            }
        }

        let mut rows = Vec::new();
        for (employee_id, entries) in by_employee {
            let Some(employee) = self.directory.get_employee(&employee_id).await? else {
                warn!(%employee_id, "ledger entries for an unknown employee left out of export");
                continue;
            };
            if employee.hourly_rate.is_none() {
                warn!(%employee_id, "employee has no hourly rate, exporting hours only");
            }
            rows.extend(employee_rows(&employee, &entries, range, &filter));
        }
        rows.sort_by(|a, b| {
            (a.date, &a.employee_name, a.clock_in).cmp(&(b.date, &b.employee_name, b.clock_in))
        });

        info!(rows = rows.len(), "payroll export built");
        Ok(rows)
    }
}

/// Overtime is assigned chronologically, so the entry that crosses eight
/// hours in a day is split across both columns.
fn employee_rows(
    employee: &Employee,
    entries: &[TimeEntry],
    range: DateRange,
    filter: &ExportFilter,
) -> Vec<PayrollExportRow> {
    let timezone = employee.timezone();
    let mut days: BTreeMap<NaiveDate, Vec<&TimeEntry>> = BTreeMap::new();
    for entry in payable_entries(entries) {
        let date = local_date(entry.clock_in, timezone);
        if range.contains(date) {
            days.entry(date).or_default().push(entry);
        }
    }

    let sixty = Decimal::from(60);
    let mut rows = Vec::new();
    for (date, mut day) in days {
        day.sort_by_key(|e| e.clock_in);
        let mut minutes_before = 0;
        for entry in day {
            let duration = entry.duration_minutes.unwrap_or_default();
            let split = MinuteSplit::of_entry(minutes_before, duration);
            minutes_before += duration;
            if !filter.admits(entry.approval_status) {
                continue;
            }
            let pay = employee.hourly_rate.map(|rate| {
                round_money(
                    Decimal::from(split.regular) * rate / sixty
                        + Decimal::from(split.overtime) * rate * OVERTIME_MULTIPLIER / sixty,
                )
            });
            rows.push(PayrollExportRow {
                employee_id: employee.id.clone(),
                employee_name: employee.name.clone(),
                date,
                time_entry_id: entry.id.clone(),
                clock_in: entry.clock_in,
                clock_out: entry.clock_out,
                regular_hours: hours(split.regular),
                overtime_hours: hours(split.overtime),
                hourly_rate: employee.hourly_rate,
                pay,
                approval_status: entry.approval_status,
            });
        }
    }
    rows
}
