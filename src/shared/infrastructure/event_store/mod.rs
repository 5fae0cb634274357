// Event store port.
//
// Purpose
// - Persist attendance session streams as ordered, append-only event lists.
//
// Responsibilities
// - Load a stream together with its current version.
// - Append with an expected version so concurrent writers to one stream
//   cannot both succeed.

use async_trait::async_trait;

pub mod in_memory;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum EventStoreError {
    #[error("version mismatch on stream: expected {expected}, actual {actual}")]
    VersionMismatch { expected: i64, actual: i64 },
    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone)]
pub struct LoadedStream<Event> {
    pub events: Vec<Event>,
    /// Number of events in the stream, zero when it does not exist yet.
    pub version: i64,
}

#[async_trait]
pub trait EventStore<Event>: Send + Sync {
    async fn load(&self, stream_id: &str) -> Result<LoadedStream<Event>, EventStoreError>;

    async fn append(
        &self,
        stream_id: &str,
        expected_version: i64,
        events: &[Event],
    ) -> Result<(), EventStoreError>;
}
