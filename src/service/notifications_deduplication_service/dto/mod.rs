mod notifications_deduplication_service_config;

pub use notifications_deduplication_service_config::*;
