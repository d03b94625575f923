use crate::{auth::Session, repository::Error};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    ///
    /// Reads logged in user from storage.
    ///
    /// Missing user id and missing user object are not errors,
    /// they give a session without user id and with an empty role.
    ///
    /// ### Errors
    /// - [Error::Io] when storage can't be read
    /// - [Error::Json] when stored user object is malformed
    ///
    async fn find_session(&self) -> Result<Session, Error>;
}
