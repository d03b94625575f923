use crate::repository::{Error, NotificationRecord};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsRepository: Send + Sync {
    ///
    /// Loads stored notifications in the order they were saved.
    /// When nothing was stored yet returns an empty Vec.
    ///
    /// ### Errors
    /// - [Error::Io] when storage can't be read
    /// - [Error::Json] when stored value is not a valid list of notifications
    ///
    async fn load(&self) -> Result<Vec<NotificationRecord>, Error>;

    ///
    /// Replaces stored notifications with `notifications`.
    ///
    async fn save(&self, notifications: &[NotificationRecord]) -> Result<(), Error>;

    ///
    /// Removes all stored notifications.
    ///
    async fn clear(&self) -> Result<(), Error>;
}
