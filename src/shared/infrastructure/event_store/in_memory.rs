use crate::shared::infrastructure::event_store::{EventStore, EventStoreError, LoadedStream};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

pub struct InMemoryEventStore<Event> {
    streams: RwLock<HashMap<String, Vec<Event>>>,
    is_offline: bool,
    delay_append_ms: AtomicU64,
}

impl<Event> Default for InMemoryEventStore<Event> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Event> InMemoryEventStore<Event> {
    pub fn new() -> Self {
        Self {
            streams: RwLock::new(HashMap::new()),
            is_offline: false,
            delay_append_ms: AtomicU64::new(0),
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Sleeps before the version check, letting racing writers load the same version.
    pub fn set_delay_append_ms(&self, delay_ms: u64) {
        self.delay_append_ms.store(delay_ms, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), EventStoreError> {
        if self.is_offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl<Event> EventStore<Event> for InMemoryEventStore<Event>
where
    Event: Clone + Send + Sync + 'static,
{
    async fn load(&self, stream_id: &str) -> Result<LoadedStream<Event>, EventStoreError> {
        self.ensure_online()?;
        let streams = self.streams.read().await;
        let events = streams.get(stream_id).cloned().unwrap_or_default();
        let version = events.len() as i64;
        Ok(LoadedStream { events, version })
    }

    async fn append(
        &self,
        stream_id: &str,
        expected_version: i64,
        events: &[Event],
    ) -> Result<(), EventStoreError> {
        self.ensure_online()?;
        let delay_ms = self.delay_append_ms.load(Ordering::SeqCst);
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
        let mut streams = self.streams.write().await;
        let stream = streams.entry(stream_id.to_string()).or_default();
        let actual = stream.len() as i64;
        if actual != expected_version {
            return Err(EventStoreError::VersionMismatch {
                expected: expected_version,
                actual,
            });
        }
        stream.extend_from_slice(events);
        Ok(())
    }
}
