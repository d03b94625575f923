mod role_filter_service;
mod unknown_role_policy;

pub use role_filter_service::*;
pub use unknown_role_policy::*;
