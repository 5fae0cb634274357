use crate::modules::attendance::core::events::AttendanceEvent;
use crate::modules::attendance::core::evolve::evolve;
use crate::modules::attendance::core::state::AttendanceSession;
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use chrono::NaiveDate;

pub fn session_stream_id(employee_id: &str, date: NaiveDate) -> String {
    format!("AttendanceSession-{employee_id}-{date}")
}

#[derive(Debug, Clone)]
pub struct LoadedSession {
    pub stream_id: String,
    pub date: NaiveDate,
    pub version: i64,
    pub events: Vec<AttendanceEvent>,
    pub session: AttendanceSession,
}

async fn load_day<S>(
    store: &S,
    employee_id: &str,
    date: NaiveDate,
) -> Result<LoadedSession, EventStoreError>
where
    S: EventStore<AttendanceEvent> + ?Sized,
{
    let stream_id = session_stream_id(employee_id, date);
    let stream = store.load(&stream_id).await?;
    let session = stream
        .events
        .iter()
        .cloned()
        .fold(AttendanceSession::default(), evolve);
    Ok(LoadedSession {
        stream_id,
        date,
        version: stream.version,
        events: stream.events,
        session,
    })
}

/// The session an action applies to: yesterday's when it is still running
/// past midnight, otherwise today's.
pub async fn load_current_session<S>(
    store: &S,
    employee_id: &str,
    today: NaiveDate,
) -> Result<LoadedSession, EventStoreError>
where
    S: EventStore<AttendanceEvent> + ?Sized,
{
    if let Some(yesterday) = today.pred_opt() {
        let previous = load_day(store, employee_id, yesterday).await?;
        if previous.session.is_active() {
            return Ok(previous);
        }
    }
    load_day(store, employee_id, today).await
}
