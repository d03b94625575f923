use crate::repository;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("notification not exist")]
    NotificationNotExist,

    #[error("invalid notification event: {0}")]
    InvalidEvent(#[from] serde_json::Error),

    #[error("storage error: {0}")]
    Storage(#[from] repository::Error),
}
