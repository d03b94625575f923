use crate::repository::Error;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    ///
    /// Reads raw value stored under the key.
    /// Missing key is not an error and gives None.
    ///
    async fn get(&self, key: &str) -> Result<Option<String>, Error>;

    ///
    /// Replaces value stored under the key.
    ///
    async fn set(&self, key: &str, value: &str) -> Result<(), Error>;

    ///
    /// Removes value stored under the key.
    /// Removing missing key succeeds.
    ///
    async fn remove(&self, key: &str) -> Result<(), Error>;
}
