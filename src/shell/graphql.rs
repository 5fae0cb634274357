use async_graphql::{EmptySubscription, ErrorExtensions, MergedObject, Schema};

use crate::modules::attendance::use_cases::get_attendance_session::inbound::graphql::AttendanceSessionQuery;
use crate::modules::attendance::use_cases::record_clock_action::inbound::graphql::ClockActionMutation;
use crate::modules::payroll::use_cases::compute_pay::inbound::graphql::PaySummaryQuery;
use crate::shared::application::errors::ApplicationError;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(AttendanceSessionQuery, PaySummaryQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(ClockActionMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

/// Carries the error kind in the `kind` extension so clients can branch on it.
pub fn gql_error(error: &ApplicationError) -> async_graphql::Error {
    let kind = error.kind().code();
    async_graphql::Error::new(error.to_string()).extend_with(|_, extensions| {
        extensions.set("kind", kind);
    })
}
