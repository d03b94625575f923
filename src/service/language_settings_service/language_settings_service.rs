use super::Language;
use crate::{error::Error, repository::KeyValueStore};
use std::sync::Arc;
use tokio::sync::watch;

pub const LANGUAGE_KEY: &str = "language";

///
/// Holds display language and lets consumers subscribe to its changes
/// instead of re-reading storage periodically.
///
pub struct LanguageSettingsService {
    store: Arc<dyn KeyValueStore>,
    sender: watch::Sender<Language>,
}

impl LanguageSettingsService {
    pub async fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let language = Self::read(store.as_ref()).await;
        let (sender, _) = watch::channel(language);

        Self { store, sender }
    }

    pub fn current(&self) -> Language {
        *self.sender.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.sender.subscribe()
    }

    ///
    /// Stores new language and notifies subscribers.
    /// Subscribers are not notified when the language did not change.
    ///
    #[tracing::instrument(name = "Set language", skip(self))]
    pub async fn set(&self, language: Language) -> Result<(), Error> {
        self.store.set(LANGUAGE_KEY, language.as_ref()).await?;
        self.publish(language);

        Ok(())
    }

    ///
    /// Reads language from storage again.
    /// Used when another component could have written the setting directly.
    ///
    pub async fn reload(&self) -> Language {
        let language = Self::read(self.store.as_ref()).await;
        self.publish(language);

        language
    }

    fn publish(&self, language: Language) {
        let changed = self.sender.send_if_modified(|current| {
            if *current == language {
                return false;
            }

            *current = language;
            true
        });

        if changed {
            tracing::info!(language = language.as_ref(), "language changed");
        }
    }

    async fn read(store: &dyn KeyValueStore) -> Language {
        let value = match store.get(LANGUAGE_KEY).await {
            Ok(Some(value)) => value,
            Ok(None) => return Language::default(),
            Err(err) => {
                tracing::warn!(%err, "failed to read language");
                return Language::default();
            }
        };

        let code = serde_json::from_str::<String>(&value).unwrap_or(value);
        match code.trim().parse() {
            Ok(language) => language,
            Err(_) => {
                tracing::warn!(code = %code, "unsupported language");
                Language::default()
            }
        }
    }
}
