use async_graphql::{Context, Object, Result as GqlResult};
use chrono::NaiveDate;

use crate::modules::payroll::use_cases::compute_pay::handler::EmployeePaySummary;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::primitives::DateRange;
use crate::shell::graphql::gql_error;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlPaySummary {
    pub employee_id: String,
    pub from: String,
    pub to: String,
    pub hourly_rate: String,
    pub days_worked: i32,
    pub regular_hours: String,
    pub overtime_hours: String,
    pub regular_pay: String,
    pub overtime_pay: String,
    pub total_pay: String,
}

impl From<EmployeePaySummary> for GqlPaySummary {
    fn from(p: EmployeePaySummary) -> Self {
        Self {
            employee_id: p.employee_id,
            from: p.from.to_string(),
            to: p.to.to_string(),
            hourly_rate: p.hourly_rate.to_string(),
            days_worked: i32::try_from(p.days_worked).unwrap_or(i32::MAX),
            regular_hours: p.summary.regular_hours.to_string(),
            overtime_hours: p.summary.overtime_hours.to_string(),
            regular_pay: p.summary.regular_pay.to_string(),
            overtime_pay: p.summary.overtime_pay.to_string(),
            total_pay: p.summary.total_pay.to_string(),
        }
    }
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ApplicationError> {
    value
        .parse()
        .map_err(|_| ApplicationError::Validation(format!("{field} must be a YYYY-MM-DD date")))
}

#[derive(Default)]
pub struct PaySummaryQuery;

#[Object]
impl PaySummaryQuery {
    async fn pay_summary(
        &self,
        context: &Context<'_>,
        employee_id: String,
        from: String,
        to: String,
    ) -> GqlResult<GqlPaySummary> {
        let state = context.data_unchecked::<AppState>();
        let from = parse_date("from", &from).map_err(|e| gql_error(&e))?;
        let to = parse_date("to", &to).map_err(|e| gql_error(&e))?;
        let range = DateRange::new(from, to).ok_or_else(|| {
            gql_error(&ApplicationError::Validation(
                "from must not be after to".into(),
            ))
        })?;
        let summary = state
            .payroll
            .handle(&employee_id, range)
            .await
            .map_err(|e| gql_error(&e))?;
        Ok(summary.into())
    }
}
