mod date_bucket_service;

pub use date_bucket_service::*;
