use super::KeyValueStore;
use crate::repository::Error;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

///
/// Volatile store, used when no storage directory is wanted
/// and in tests.
///
#[derive(Default)]
pub struct MemoryKeyValueStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.values.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        self.values
            .lock()
            .await
            .insert(key.to_string(), value.to_string());

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), Error> {
        self.values.lock().await.remove(key);

        Ok(())
    }
}
