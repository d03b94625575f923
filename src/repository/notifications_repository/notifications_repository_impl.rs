use super::NotificationsRepository;
use crate::repository::{Error, KeyValueStore, NotificationRecord};
use async_trait::async_trait;
use std::sync::Arc;

pub const NOTIFICATIONS_KEY: &str = "notifications";

pub struct NotificationsRepositoryImpl {
    store: Arc<dyn KeyValueStore>,
}

impl NotificationsRepositoryImpl {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl NotificationsRepository for NotificationsRepositoryImpl {
    async fn load(&self) -> Result<Vec<NotificationRecord>, Error> {
        let Some(json) = self.store.get(NOTIFICATIONS_KEY).await? else {
            tracing::trace!("no notifications stored");
            return Ok(Vec::new());
        };

        // Stored `null` is treated the same way as missing key
        let notifications = serde_json::from_str::<Option<Vec<NotificationRecord>>>(&json)?;
        let notifications = notifications.unwrap_or_default();
        tracing::trace!(count = notifications.len(), "loaded notifications");

        Ok(notifications)
    }

    async fn save(&self, notifications: &[NotificationRecord]) -> Result<(), Error> {
        let json = serde_json::to_string(notifications)?;
        self.store.set(NOTIFICATIONS_KEY, &json).await?;
        tracing::trace!(count = notifications.len(), "saved notifications");

        Ok(())
    }

    async fn clear(&self) -> Result<(), Error> {
        self.store.remove(NOTIFICATIONS_KEY).await
    }
}
