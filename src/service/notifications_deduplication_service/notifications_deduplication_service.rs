use super::NotificationsDeduplicationServiceConfig;
use crate::repository::NotificationRecord;

pub struct NotificationsDeduplicationService {
    config: NotificationsDeduplicationServiceConfig,
}

impl NotificationsDeduplicationService {
    pub fn new(config: NotificationsDeduplicationServiceConfig) -> Self {
        Self { config }
    }

    ///
    /// Checks whether `candidate` is already present in `stored`.
    ///
    /// Candidate is a duplicate when
    /// - any stored notification has the same id
    /// - any stored notification has the same title and body
    ///   and was received less than `duplicate_window` apart
    ///
    pub fn is_duplicate(&self, candidate: &NotificationRecord, stored: &[NotificationRecord]) -> bool {
        if stored.iter().any(|record| record.id == candidate.id) {
            tracing::trace!(id = candidate.id, "duplicate id");
            return true;
        }

        let same_content_nearby = stored.iter().any(|record| {
            record.title == candidate.title
                && record.body == candidate.body
                && (record.date - candidate.date).unsigned_abs() < self.config.duplicate_window
        });
        if same_content_nearby {
            tracing::trace!(id = candidate.id, "duplicate title and body");
        }

        same_content_nearby
    }

    ///
    /// Puts `candidate` in front of `stored` and drops the oldest
    /// notifications above `max_stored_notifications`.
    ///
    /// ### Returns
    /// - None when candidate is a duplicate
    /// - Some with updated list otherwise
    ///
    pub fn deduplicate(
        &self,
        candidate: NotificationRecord,
        stored: Vec<NotificationRecord>,
    ) -> Option<Vec<NotificationRecord>> {
        if self.is_duplicate(&candidate, &stored) {
            return None;
        }

        let mut notifications = Vec::with_capacity(stored.len() + 1);
        notifications.push(candidate);
        notifications.extend(stored);

        let len_before = notifications.len();
        notifications.truncate(self.config.max_stored_notifications);

        let dropped = len_before - notifications.len();
        if dropped > 0 {
            tracing::debug!(dropped, "dropped oldest notifications");
        }

        Some(notifications)
    }
}
