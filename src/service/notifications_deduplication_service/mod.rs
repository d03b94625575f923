mod dto;
mod notifications_deduplication_service;

pub use dto::NotificationsDeduplicationServiceConfig;
pub use notifications_deduplication_service::*;
