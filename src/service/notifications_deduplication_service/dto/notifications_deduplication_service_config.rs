use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct NotificationsDeduplicationServiceConfig {
    /// Same title and body received within this window is a duplicate
    pub duplicate_window: Duration,
    pub max_stored_notifications: usize,
}

impl Default for NotificationsDeduplicationServiceConfig {
    fn default() -> Self {
        Self {
            duplicate_window: Duration::from_millis(5000),
            max_stored_notifications: 100,
        }
    }
}
