use serde::{Deserialize, Serialize};

pub mod v1 {
    pub mod break_started;
    pub mod work_ended;
    pub mod work_resumed;
    pub mod work_started;
}

use v1::break_started::BreakStartedV1;
use v1::work_ended::WorkEndedV1;
use v1::work_resumed::WorkResumedV1;
use v1::work_started::WorkStartedV1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum AttendanceEvent {
    WorkStartedV1(WorkStartedV1),
    BreakStartedV1(BreakStartedV1),
    WorkResumedV1(WorkResumedV1),
    WorkEndedV1(WorkEndedV1),
}

impl AttendanceEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AttendanceEvent::WorkStartedV1(_) => "WorkStartedV1",
            AttendanceEvent::BreakStartedV1(_) => "BreakStartedV1",
            AttendanceEvent::WorkResumedV1(_) => "WorkResumedV1",
            AttendanceEvent::WorkEndedV1(_) => "WorkEndedV1",
        }
    }
}
