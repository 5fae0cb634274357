use crate::modules::attendance::core::events::AttendanceEvent;
use crate::modules::attendance::core::events::v1::break_started::BreakStartedV1;
use crate::modules::attendance::core::events::v1::work_ended::{EndedSegment, WorkEndedV1};
use crate::modules::attendance::core::events::v1::work_resumed::WorkResumedV1;
use crate::modules::attendance::core::events::v1::work_started::WorkStartedV1;
use crate::modules::attendance::core::intents::AttendanceIntent;
use crate::modules::attendance::core::state::{AttendanceSession, BreakType, SessionState};
use crate::modules::attendance::use_cases::record_clock_action::command::{
    ClockAction, RecordClockAction,
};
use crate::modules::attendance::use_cases::record_clock_action::decision::{
    DecideError, Decision,
};
use crate::shared::core::primitives::{minutes_between, seconds_between};

/// Guard shared by the handler's pre-check and `decide`.
pub fn permits(state: SessionState, action: ClockAction) -> Result<(), DecideError> {
    let allowed = matches!(
        (state, action),
        (SessionState::Idle, ClockAction::ClockIn)
            | (SessionState::Working, ClockAction::StartBreak { .. })
            | (SessionState::OnBreak, ClockAction::ResumeWork)
            | (SessionState::Working | SessionState::OnBreak, ClockAction::ClockOut)
    );
    if allowed {
        Ok(())
    } else {
        Err(DecideError::InvalidStateTransition {
            from: state,
            action,
        })
    }
}

pub fn decide_clock_action(session: &AttendanceSession, command: RecordClockAction) -> Decision {
    if let Err(reason) = permits(session.state, command.action) {
        return Decision::Rejected { reason };
    }

    let now = command.occurred_at;
    let running = match (session.segment_started_at(), session.open_entry_id.clone()) {
        (Some(started), Some(entry_id)) => Some((started, entry_id)),
        _ => None,
    };
    if let Some((started, _)) = &running {
        if now < *started {
            return Decision::Rejected {
                reason: DecideError::OutOfOrder { occurred_at: now },
            };
        }
    }

    match (command.action, running) {
        (ClockAction::ClockIn, _) => {
            let clearance = command.clearance.unwrap_or_default();
            let mut intents = Vec::new();
            if let Some(late_by_minutes) = clearance.late_by_minutes {
                intents.push(AttendanceIntent::NotifyLateClockIn {
                    employee_id: command.employee_id.clone(),
                    late_by_minutes,
                });
            }
            if let Some(manager_id) = &clearance.assisted_by {
                intents.push(AttendanceIntent::NotifyAssistedClockIn {
                    employee_id: command.employee_id.clone(),
                    assisted_by: manager_id.clone(),
                });
            }
            Decision::Accepted {
                events: vec![AttendanceEvent::WorkStartedV1(WorkStartedV1 {
                    employee_id: command.employee_id,
                    organization_id: command.organization_id,
                    date: command.date,
                    entry_id: command.next_entry_id,
                    started_at: now,
                    assisted_by: clearance.assisted_by,
                    shift_id: clearance.shift_id,
                    late_by_minutes: clearance.late_by_minutes,
                    task_id: command.task_id,
                })],
                intents,
            }
        }
        (ClockAction::StartBreak { break_type }, Some((started, entry_id))) => {
            let worked_seconds = seconds_between(started, now);
            let total_worked_minutes = (session.accumulated_work_seconds + worked_seconds) / 60;
            let mut intents = Vec::new();
            if break_type != BreakType::Lunch
                && !session.lunch_taken
                && total_worked_minutes > command.meal_break_threshold_minutes
            {
                intents.push(AttendanceIntent::NotifyMealBreakDue {
                    employee_id: command.employee_id.clone(),
                    worked_minutes: total_worked_minutes,
                });
            }
            Decision::Accepted {
                events: vec![AttendanceEvent::BreakStartedV1(BreakStartedV1 {
                    employee_id: command.employee_id,
                    organization_id: command.organization_id,
                    closed_entry_id: entry_id,
                    worked_seconds,
                    worked_minutes: minutes_between(started, now),
                    break_entry_id: command.next_entry_id,
                    break_type,
                    started_at: now,
                })],
                intents,
            }
        }
        (ClockAction::ResumeWork, Some((started, entry_id))) => Decision::Accepted {
            events: vec![AttendanceEvent::WorkResumedV1(WorkResumedV1 {
                employee_id: command.employee_id,
                organization_id: command.organization_id,
                closed_entry_id: entry_id,
                break_seconds: seconds_between(started, now),
                break_minutes: minutes_between(started, now),
                work_entry_id: command.next_entry_id,
                resumed_at: now,
                task_id: session.task_id.clone(),
            })],
            intents: vec![],
        },
        (ClockAction::ClockOut, Some((started, entry_id))) => {
            let ended_segment = if session.state == SessionState::OnBreak {
                EndedSegment::Break
            } else {
                EndedSegment::Work
            };
            Decision::Accepted {
                events: vec![AttendanceEvent::WorkEndedV1(WorkEndedV1 {
                    employee_id: command.employee_id,
                    closed_entry_id: entry_id,
                    ended_segment,
                    segment_seconds: seconds_between(started, now),
                    segment_minutes: minutes_between(started, now),
                    ended_at: now,
                })],
                intents: vec![],
            }
        }
        (action, None) => Decision::Rejected {
            reason: DecideError::InvalidStateTransition {
                from: session.state,
                action,
            },
        },
    }
}
