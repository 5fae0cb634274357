use crate::modules::attendance::core::events::AttendanceEvent;
use crate::modules::attendance::core::ledger::{EntryKind, TimeEntry};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Open(TimeEntry),
    Close {
        entry_id: String,
        clock_out: DateTime<Utc>,
        duration_minutes: i64,
    },
}

pub fn apply(stream_id: &str, version: i64, event: &AttendanceEvent) -> Vec<Mutation> {
    let stream_key = format!("{stream_id}:{version}");
    match event {
        AttendanceEvent::WorkStartedV1(e) => {
            let mut entry = TimeEntry::open(
                &e.entry_id,
                &e.employee_id,
                &e.organization_id,
                EntryKind::Work,
                e.started_at,
            );
            entry.source_task_id = e.task_id.clone();
            entry.shift_id = e.shift_id.clone();
            entry.notes = e
                .assisted_by
                .as_ref()
                .map(|manager| format!("Clocked in with assistance from {manager}"));
            entry.last_event_id = Some(stream_key);
            vec![Mutation::Open(entry)]
        }
        AttendanceEvent::BreakStartedV1(e) => {
            let mut entry = TimeEntry::open(
                &e.break_entry_id,
                &e.employee_id,
                &e.organization_id,
                EntryKind::Break {
                    break_type: e.break_type,
                },
                e.started_at,
            );
            entry.notes = Some(e.break_type.label().to_string());
            entry.last_event_id = Some(stream_key);
            vec![
                Mutation::Close {
                    entry_id: e.closed_entry_id.clone(),
                    clock_out: e.started_at,
                    duration_minutes: e.worked_minutes,
                },
                Mutation::Open(entry),
            ]
        }
        AttendanceEvent::WorkResumedV1(e) => {
            let mut entry = TimeEntry::open(
                &e.work_entry_id,
                &e.employee_id,
                &e.organization_id,
                EntryKind::Work,
                e.resumed_at,
            );
            entry.source_task_id = e.task_id.clone();
            entry.last_event_id = Some(stream_key);
            vec![
                Mutation::Close {
                    entry_id: e.closed_entry_id.clone(),
                    clock_out: e.resumed_at,
                    duration_minutes: e.break_minutes,
                },
                Mutation::Open(entry),
            ]
        }
        AttendanceEvent::WorkEndedV1(e) => vec![Mutation::Close {
            entry_id: e.closed_entry_id.clone(),
            clock_out: e.ended_at,
            duration_minutes: e.segment_minutes,
        }],
    }
}
