use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::attendance::core::snapshot::SessionSnapshot;
use crate::shell::graphql::gql_error;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlSessionSnapshot {
    pub employee_id: String,
    pub date: Option<String>,
    pub state: String,
    pub break_type: Option<String>,
    pub segment_started_at: Option<String>,
    pub worked_minutes: i64,
    pub break_minutes: i64,
    pub clocked_in_late: bool,
    pub assisted_by: Option<String>,
    pub requires_meal_break: bool,
    pub suggested_break_type: Option<String>,
}

fn label<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}

impl From<SessionSnapshot> for GqlSessionSnapshot {
    fn from(s: SessionSnapshot) -> Self {
        Self {
            employee_id: s.employee_id,
            date: s.date.map(|d| d.to_string()),
            state: label(&s.state),
            break_type: s.break_type.as_ref().map(label),
            segment_started_at: s.segment_started_at.map(|t| t.to_rfc3339()),
            worked_minutes: s.worked_minutes,
            break_minutes: s.break_minutes,
            clocked_in_late: s.clocked_in_late,
            assisted_by: s.assisted_by,
            requires_meal_break: s.requires_meal_break,
            suggested_break_type: s.suggested_break_type.as_ref().map(label),
        }
    }
}

#[derive(Default)]
pub struct AttendanceSessionQuery;

#[Object]
impl AttendanceSessionQuery {
    async fn attendance_session(
        &self,
        context: &Context<'_>,
        employee_id: String,
    ) -> GqlResult<GqlSessionSnapshot> {
        let state = context.data_unchecked::<AppState>();
        let snapshot = state
            .sessions
            .handle(&employee_id, Utc::now())
            .await
            .map_err(|e| gql_error(&e))?;
        Ok(snapshot.into())
    }
}
