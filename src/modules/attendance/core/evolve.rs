use crate::modules::attendance::core::events::AttendanceEvent;
use crate::modules::attendance::core::events::v1::work_ended::EndedSegment;
use crate::modules::attendance::core::state::{AttendanceSession, BreakType, SessionState};

pub fn evolve(session: AttendanceSession, event: AttendanceEvent) -> AttendanceSession {
    match (session.state, event) {
        (SessionState::Idle, AttendanceEvent::WorkStartedV1(e)) => AttendanceSession {
            employee_id: e.employee_id,
            organization_id: e.organization_id,
            date: Some(e.date),
            state: SessionState::Working,
            work_started_at: Some(e.started_at),
            break_started_at: None,
            break_type: None,
            open_entry_id: Some(e.entry_id),
            clocked_in_late: session.clocked_in_late || e.late_by_minutes.is_some(),
            assisted_by: e.assisted_by.or(session.assisted_by),
            task_id: e.task_id,
            ..session
        },
        (SessionState::Working, AttendanceEvent::BreakStartedV1(e)) => AttendanceSession {
            state: SessionState::OnBreak,
            accumulated_work_seconds: session.accumulated_work_seconds + e.worked_seconds.max(0),
            work_started_at: None,
            break_started_at: Some(e.started_at),
            break_type: Some(e.break_type),
            lunch_taken: session.lunch_taken || e.break_type == BreakType::Lunch,
            open_entry_id: Some(e.break_entry_id),
            ..session
        },
        (SessionState::OnBreak, AttendanceEvent::WorkResumedV1(e)) => AttendanceSession {
            state: SessionState::Working,
            accumulated_break_seconds: session.accumulated_break_seconds + e.break_seconds.max(0),
            work_started_at: Some(e.resumed_at),
            break_started_at: None,
            break_type: None,
            open_entry_id: Some(e.work_entry_id),
            ..session
        },
        (SessionState::Working | SessionState::OnBreak, AttendanceEvent::WorkEndedV1(e)) => {
            let seconds = e.segment_seconds.max(0);
            let (work, rest) = match e.ended_segment {
                EndedSegment::Work => (seconds, 0),
                EndedSegment::Break => (0, seconds),
            };
            AttendanceSession {
                state: SessionState::Idle,
                accumulated_work_seconds: session.accumulated_work_seconds + work,
                accumulated_break_seconds: session.accumulated_break_seconds + rest,
                work_started_at: None,
                break_started_at: None,
                break_type: None,
                open_entry_id: None,
                task_id: None,
                ..session
            }
        }
        (_, _) => session,
    }
}
