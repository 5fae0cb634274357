use crate::shared::infrastructure::notification_sink::{
    Notification, NotificationError, NotificationSink,
};
use async_trait::async_trait;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryNotificationSink {
    sent: Mutex<Vec<Notification>>,
    is_offline: bool,
}

impl InMemoryNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn sent(&self) -> Vec<Notification> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl NotificationSink for InMemoryNotificationSink {
    async fn notify(&self, notification: &Notification) -> Result<(), NotificationError> {
        if self.is_offline {
            return Err(NotificationError::Unavailable("sink offline".into()));
        }
        self.sent.lock().await.push(notification.clone());
        Ok(())
    }
}
