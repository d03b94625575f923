use super::KeyValueStore;
use crate::repository::Error;
use async_trait::async_trait;
use std::{io::ErrorKind, path::PathBuf};

///
/// Durable store keeping every key in its own file inside `directory`.
///
/// Writes go to a temporary file that is renamed over the target,
/// so a reader never observes a half written value.
///
pub struct FileKeyValueStore {
    directory: PathBuf,
}

impl FileKeyValueStore {
    pub async fn new(directory: impl Into<PathBuf>) -> Result<Self, Error> {
        let directory = directory.into();

        tracing::debug!(directory = %directory.display(), "creating storage directory");
        tokio::fs::create_dir_all(&directory).await?;

        Ok(Self { directory })
    }

    fn path(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{key}.json"))
    }

    fn temporary_path(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{key}.json.tmp"))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, Error> {
        match tokio::fs::read_to_string(self.path(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Error::Io(err)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let temporary_path = self.temporary_path(key);
        tokio::fs::write(&temporary_path, value).await?;
        tokio::fs::rename(&temporary_path, self.path(key)).await?;

        tracing::trace!(key, len = value.len(), "value written");

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), Error> {
        match tokio::fs::remove_file(self.path(key)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Error::Io(err)),
        }
    }
}
