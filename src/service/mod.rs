pub mod date_bucket_service;
pub mod language_settings_service;
pub mod navigation_service;
pub mod notifications_deduplication_service;
pub mod notifications_service;
pub mod role_filter_service;
