mod dto;
mod notifications_service;
mod notifications_service_impl;

pub use dto::{IngestOutcome, NotificationsServiceConfig};
pub use notifications_service::*;
pub use notifications_service_impl::*;
