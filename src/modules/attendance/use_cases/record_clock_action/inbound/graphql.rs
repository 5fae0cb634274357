use async_graphql::{Context, Enum, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::attendance::core::state::BreakType;
use crate::modules::attendance::use_cases::get_attendance_session::inbound::graphql::GqlSessionSnapshot;
use crate::modules::attendance::use_cases::record_clock_action::command::ClockAction;
use crate::modules::attendance::use_cases::record_clock_action::handler::ClockActionRequest;
use crate::shell::graphql::gql_error;
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlBreakType {
    Coffee,
    Lunch,
    Other,
}

impl From<GqlBreakType> for BreakType {
    fn from(value: GqlBreakType) -> Self {
        match value {
            GqlBreakType::Coffee => BreakType::Coffee,
            GqlBreakType::Lunch => BreakType::Lunch,
            GqlBreakType::Other => BreakType::Other,
        }
    }
}

async fn record(
    context: &Context<'_>,
    employee_id: String,
    action: ClockAction,
    token_nonce: Option<String>,
    assisted_by: Option<String>,
    task_id: Option<String>,
) -> GqlResult<GqlSessionSnapshot> {
    let state = context.data_unchecked::<AppState>();
    let request = ClockActionRequest {
        employee_id,
        action,
        token_nonce,
        assisted_by,
        occurred_at: Utc::now(),
        task_id,
    };
    let snapshot = state
        .clock_actions
        .handle(request)
        .await
        .map_err(|e| gql_error(&e))?;
    Ok(snapshot.into())
}

#[derive(Default)]
pub struct ClockActionMutation;

#[Object]
impl ClockActionMutation {
    async fn clock_in(
        &self,
        context: &Context<'_>,
        employee_id: String,
        token_nonce: String,
        assisted_by: Option<String>,
        task_id: Option<String>,
    ) -> GqlResult<GqlSessionSnapshot> {
        record(
            context,
            employee_id,
            ClockAction::ClockIn,
            Some(token_nonce),
            assisted_by,
            task_id,
        )
        .await
    }

    async fn start_break(
        &self,
        context: &Context<'_>,
        employee_id: String,
        break_type: GqlBreakType,
    ) -> GqlResult<GqlSessionSnapshot> {
        let action = ClockAction::StartBreak {
            break_type: break_type.into(),
        };
        record(context, employee_id, action, None, None, None).await
    }

    async fn resume_work(
        &self,
        context: &Context<'_>,
        employee_id: String,
    ) -> GqlResult<GqlSessionSnapshot> {
        record(context, employee_id, ClockAction::ResumeWork, None, None, None).await
    }

    async fn clock_out(
        &self,
        context: &Context<'_>,
        employee_id: String,
        token_nonce: Option<String>,
        assisted_by: Option<String>,
    ) -> GqlResult<GqlSessionSnapshot> {
        record(
            context,
            employee_id,
            ClockAction::ClockOut,
            token_nonce,
            assisted_by,
            None,
        )
        .await
    }
}
