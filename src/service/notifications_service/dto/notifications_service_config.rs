use crate::service::{
    notifications_deduplication_service::NotificationsDeduplicationServiceConfig,
    role_filter_service::UnknownRolePolicy,
};
use time::UtcOffset;

#[derive(Debug, Clone, Copy)]
pub struct NotificationsServiceConfig {
    pub deduplication: NotificationsDeduplicationServiceConfig,
    pub unknown_role_policy: UnknownRolePolicy,
    /// Offset used to decide which calendar day a notification belongs to
    pub utc_offset: UtcOffset,
}

impl Default for NotificationsServiceConfig {
    fn default() -> Self {
        Self {
            deduplication: NotificationsDeduplicationServiceConfig::default(),
            unknown_role_policy: UnknownRolePolicy::default(),
            utc_offset: UtcOffset::UTC,
        }
    }
}
