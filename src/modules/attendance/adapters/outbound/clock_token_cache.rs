use crate::modules::attendance::adapters::outbound::clock_token_store::ClockTokenStore;
use crate::modules::attendance::use_cases::clock_tokens::token::{
    ClockToken, ClockTokenAction, TokenRejection,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use moka::Expiry;
use moka::future::Cache;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// How long a token outlives its window so late scans report `Expired`.
const EXPIRED_RETENTION: Duration = Duration::from_secs(60);

struct StoredToken {
    token: ClockToken,
    consumed: AtomicBool,
}

struct TokenExpiry;

impl Expiry<String, Arc<StoredToken>> for TokenExpiry {
    fn expire_after_create(
        &self,
        _nonce: &String,
        stored: &Arc<StoredToken>,
        _created_at: Instant,
    ) -> Option<Duration> {
        let window = (stored.token.expires_at - stored.token.issued_at)
            .to_std()
            .unwrap_or_default();
        Some(window + EXPIRED_RETENTION)
    }
}

pub struct MokaClockTokenStore {
    cache: Cache<String, Arc<StoredToken>>,
}

impl MokaClockTokenStore {
    pub fn new(max_capacity: u64) -> Self {
        Self {
            cache: Cache::builder()
                .max_capacity(max_capacity)
                .expire_after(TokenExpiry)
                .build(),
        }
    }
}

#[async_trait]
impl ClockTokenStore for MokaClockTokenStore {
    async fn remember(&self, token: ClockToken) {
        let stored = Arc::new(StoredToken {
            token,
            consumed: AtomicBool::new(false),
        });
        self.cache.insert(stored.token.nonce.clone(), stored).await;
    }

    async fn consume(
        &self,
        nonce: &str,
        employee_id: &str,
        action: ClockTokenAction,
        now: DateTime<Utc>,
    ) -> Result<ClockToken, TokenRejection> {
        let Some(stored) = self.cache.get(nonce).await else {
            return Err(TokenRejection::Unknown);
        };
        if stored.token.employee_id != employee_id {
            return Err(TokenRejection::Unknown);
        }
        if stored.token.action != action {
            return Err(TokenRejection::ActionMismatch);
        }
        if stored.consumed.load(Ordering::Acquire) {
            return Err(TokenRejection::AlreadyConsumed);
        }
        stored.token.check_window(now)?;
        stored
            .consumed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| TokenRejection::AlreadyConsumed)?;
        Ok(stored.token.clone())
    }

    async fn release(&self, nonce: &str) -> bool {
        let Some(stored) = self.cache.get(nonce).await else {
            return false;
        };
        stored
            .consumed
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}
