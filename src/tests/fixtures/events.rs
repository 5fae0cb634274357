// Canonical session events for one employee day:
// clock in 09:00, lunch 12:00 to 12:30, clock out 16:30.

use crate::modules::attendance::core::events::AttendanceEvent;
use crate::modules::attendance::core::events::v1::break_started::BreakStartedV1;
use crate::modules::attendance::core::events::v1::work_ended::{EndedSegment, WorkEndedV1};
use crate::modules::attendance::core::events::v1::work_resumed::WorkResumedV1;
use crate::modules::attendance::core::events::v1::work_started::WorkStartedV1;
use crate::modules::attendance::core::state::BreakType;
use crate::tests::fixtures::{at, today};

pub fn make_work_started_v1_event() -> AttendanceEvent {
    AttendanceEvent::WorkStartedV1(WorkStartedV1 {
        employee_id: "e-1".to_string(),
        organization_id: "org-1".to_string(),
        date: today(),
        entry_id: "entry-1".to_string(),
        started_at: at(9, 0),
        assisted_by: None,
        shift_id: None,
        late_by_minutes: None,
        task_id: None,
    })
}

pub fn make_break_started_v1_event() -> AttendanceEvent {
    AttendanceEvent::BreakStartedV1(BreakStartedV1 {
        employee_id: "e-1".to_string(),
        organization_id: "org-1".to_string(),
        closed_entry_id: "entry-1".to_string(),
        worked_seconds: 3 * 3600,
        worked_minutes: 180,
        break_entry_id: "entry-2".to_string(),
        break_type: BreakType::Lunch,
        started_at: at(12, 0),
    })
}

pub fn make_work_resumed_v1_event() -> AttendanceEvent {
    AttendanceEvent::WorkResumedV1(WorkResumedV1 {
        employee_id: "e-1".to_string(),
        organization_id: "org-1".to_string(),
        closed_entry_id: "entry-2".to_string(),
        break_seconds: 30 * 60,
        break_minutes: 30,
        work_entry_id: "entry-3".to_string(),
        resumed_at: at(12, 30),
        task_id: None,
    })
}

pub fn make_work_ended_v1_event() -> AttendanceEvent {
    AttendanceEvent::WorkEndedV1(WorkEndedV1 {
        employee_id: "e-1".to_string(),
        closed_entry_id: "entry-3".to_string(),
        ended_segment: EndedSegment::Work,
        segment_seconds: 4 * 3600,
        segment_minutes: 240,
        ended_at: at(16, 30),
    })
}
