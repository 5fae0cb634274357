use crate::modules::attendance::use_cases::clock_tokens::token::{
    ClockToken, ClockTokenAction, TokenRejection,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ClockTokenStore: Send + Sync {
    async fn remember(&self, token: ClockToken);

    /// Atomically marks the token consumed. Of two concurrent calls for one
    /// nonce at most one returns `Ok`. A rejected call leaves the token as it was.
    async fn consume(
        &self,
        nonce: &str,
        employee_id: &str,
        action: ClockTokenAction,
        now: DateTime<Utc>,
    ) -> Result<ClockToken, TokenRejection>;

    /// Returns a consumed token to the unconsumed state when the action it
    /// authorized was not recorded. Returns whether anything changed.
    async fn release(&self, nonce: &str) -> bool;
}
