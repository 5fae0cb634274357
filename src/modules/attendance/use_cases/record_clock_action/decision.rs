use crate::modules::attendance::core::events::AttendanceEvent;
use crate::modules::attendance::core::intents::AttendanceIntent;
use crate::modules::attendance::core::state::SessionState;
use crate::modules::attendance::use_cases::record_clock_action::command::ClockAction;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum DecideError {
    #[error("cannot {action} while {from}: {}", hint(.from, .action))]
    InvalidStateTransition {
        from: SessionState,
        action: ClockAction,
    },
    #[error("clock action at {occurred_at} is earlier than the running segment")]
    OutOfOrder { occurred_at: chrono::DateTime<chrono::Utc> },
}

fn hint(from: &SessionState, action: &ClockAction) -> &'static str {
    match (from, action) {
        (SessionState::Working, ClockAction::ClockIn) => "clock out or start a break instead",
        (SessionState::OnBreak, ClockAction::ClockIn) => "resume work or clock out instead",
        (SessionState::Idle, ClockAction::StartBreak { .. }) => "clock in first",
        (SessionState::OnBreak, ClockAction::StartBreak { .. }) => "resume work first",
        (SessionState::Idle, ClockAction::ResumeWork) => "clock in to start working",
        (SessionState::Working, ClockAction::ResumeWork) => "there is no break to end",
        (SessionState::Idle, ClockAction::ClockOut) => "there is nothing to clock out of",
        _ => "this transition is not allowed",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Accepted {
        events: Vec<AttendanceEvent>,
        intents: Vec<AttendanceIntent>,
    },
    Rejected {
        reason: DecideError,
    },
}
