use super::IngestOutcome;
use crate::{
    auth::Session,
    dto::{input, output},
    error::Error,
    repository::NotificationRecord,
};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsService: Send + Sync {
    ///
    /// Wraps received event into a notification and stores it
    /// as the newest one, unless it's a duplicate.
    ///
    /// Storage failures are logged and reported as [IngestOutcome::Abandoned].
    ///
    async fn ingest(&self, event: input::NotificationEvent) -> IngestOutcome;

    ///
    /// Loads all stored notifications, newest first.
    /// Storage failures give an empty Vec.
    ///
    async fn load(&self) -> Vec<NotificationRecord>;

    ///
    /// Reads logged in user.
    /// Storage failures give [Session::anonymous].
    ///
    async fn find_session(&self) -> Session;

    ///
    /// Finds notifications visible to the session user,
    /// grouped by the day they were received on.
    ///
    async fn find_buckets(&self, session: &Session) -> Vec<output::NotificationBucket>;

    ///
    /// Counts unread notifications visible to the session user.
    ///
    async fn count_unread(&self, session: &Session) -> usize;

    ///
    /// Marks notification as read.
    /// Marking already read notification succeeds without writing.
    ///
    /// ### Errors
    /// - [Error::NotificationNotExist] when notification with id is not stored
    /// - [Error::Storage] when storage can't be read or written
    ///
    async fn mark_read(&self, id: &str) -> Result<(), Error>;

    ///
    /// Marks all notifications visible to the session user as read.
    ///
    /// ### Returns
    /// Number of notifications that changed
    ///
    /// ### Errors
    /// - [Error::Storage] when storage can't be read or written
    ///
    async fn mark_all_read(&self, session: &Session) -> Result<usize, Error>;

    ///
    /// Handles tap on notification: marks it as read
    /// and picks the screen that should be opened.
    /// Failure to persist read flag does not prevent navigation.
    ///
    /// ### Errors
    /// - [Error::NotificationNotExist] when notification with id is not stored
    ///
    async fn open(&self, id: &str) -> Result<output::NavigationTarget, Error>;

    ///
    /// Removes all stored notifications, used on logout.
    ///
    async fn clear(&self) -> Result<(), Error>;
}
