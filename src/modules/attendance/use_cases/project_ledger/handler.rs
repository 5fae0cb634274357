use crate::modules::attendance::adapters::outbound::ledger::{TimeEntryLedger, WatermarkRepository};
use crate::modules::attendance::core::events::AttendanceEvent;
use crate::modules::attendance::core::projections::{Mutation, apply};
use std::sync::Arc;
use tracing::debug;

/// Builds ledger rows from session streams. Each stream keeps its own
/// watermark, so replaying a stream only applies versions not seen before.
#[derive(Clone)]
pub struct Projector<TLedger, TWatermarkRepository>
where
    TLedger: TimeEntryLedger + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub name: String,
    pub ledger: Arc<TLedger>,
    pub watermark_repository: Arc<TWatermarkRepository>,
}

impl<TLedger, TWatermarkRepository> Projector<TLedger, TWatermarkRepository>
where
    TLedger: TimeEntryLedger + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub fn new(
        name: impl Into<String>,
        ledger: Arc<TLedger>,
        watermark: Arc<TWatermarkRepository>,
    ) -> Self {
        Self {
            name: name.into(),
            ledger,
            watermark_repository: watermark,
        }
    }

    fn watermark_key(&self, stream_id: &str) -> String {
        format!("{}:{stream_id}", self.name)
    }

    pub async fn apply_one(
        &self,
        stream_id: &str,
        version: i64,
        event: &AttendanceEvent,
    ) -> anyhow::Result<()> {
        let key = self.watermark_key(stream_id);
        if let Some(last) = self.watermark_repository.get(&key).await? {
            if version <= last {
                debug!(stream_id, version, "event already projected");
                return Ok(());
            }
        }
        for mutation in apply(stream_id, version, event) {
            match mutation {
                Mutation::Open(entry) => self.ledger.append_time_entry(entry).await?,
                Mutation::Close {
                    entry_id,
                    clock_out,
                    duration_minutes,
                } => {
                    self.ledger
                        .close_time_entry(&entry_id, clock_out, duration_minutes)
                        .await?
                }
            }
        }
        self.watermark_repository.set(&key, version).await?;
        Ok(())
    }

    /// Applies every event of a stream, versions start at 1.
    pub async fn catch_up(&self, stream_id: &str, events: &[AttendanceEvent]) -> anyhow::Result<()> {
        for (index, event) in events.iter().enumerate() {
            self.apply_one(stream_id, index as i64 + 1, event).await?;
        }
        Ok(())
    }
}
