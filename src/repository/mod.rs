mod dto;
mod error;
mod key_value_store;
mod notifications_repository;
mod session_repository;

pub use dto::*;
pub use error::*;
pub use key_value_store::*;
pub use notifications_repository::*;
pub use session_repository::*;
