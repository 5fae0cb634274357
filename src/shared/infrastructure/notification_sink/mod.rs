use async_trait::async_trait;
use serde::Serialize;
use tracing::warn;

pub mod in_memory;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub user_id: String,
    pub message: String,
}

impl Notification {
    pub fn new(user_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum NotificationError {
    #[error("notification sink unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn notify(&self, notification: &Notification) -> Result<(), NotificationError>;
}

/// Best-effort delivery. Failures are logged and never reach the caller.
pub async fn deliver_all(sink: &dyn NotificationSink, notifications: Vec<Notification>) {
    for notification in notifications {
        if let Err(error) = sink.notify(&notification).await {
            warn!(user_id = %notification.user_id, %error, "notification dropped");
        }
    }
}
