mod ingest_outcome;
mod notifications_service_config;

pub use ingest_outcome::*;
pub use notifications_service_config::*;
