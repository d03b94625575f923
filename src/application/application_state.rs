use super::ApplicationEnv;
use crate::{
    repository::{
        FileKeyValueStore, KeyValueStore, NotificationsRepositoryImpl, SessionRepositoryImpl,
    },
    service::{
        language_settings_service::LanguageSettingsService,
        notifications_deduplication_service::NotificationsDeduplicationServiceConfig,
        notifications_service::{
            NotificationsService, NotificationsServiceConfig, NotificationsServiceImpl,
        },
    },
};
use std::sync::Arc;

#[derive(Clone)]
pub struct ApplicationState {
    pub notifications_service: Arc<dyn NotificationsService>,
    pub language_settings_service: Arc<LanguageSettingsService>,
}

pub async fn create_state(env: &ApplicationEnv) -> anyhow::Result<ApplicationState> {
    tracing::info!("opening storage");
    let store = FileKeyValueStore::new(&env.storage_directory).await?;
    let store = Arc::new(store);

    let config = NotificationsServiceConfig {
        deduplication: NotificationsDeduplicationServiceConfig {
            duplicate_window: env.duplicate_window,
            max_stored_notifications: env.max_stored_notifications,
        },
        unknown_role_policy: env.unknown_role_policy,
        utc_offset: env.utc_offset,
    };

    Ok(create_state_with_store(config, store).await)
}

///
/// Wires repositories and services on top of already opened storage.
///
pub async fn create_state_with_store(
    config: NotificationsServiceConfig,
    store: Arc<dyn KeyValueStore>,
) -> ApplicationState {
    tracing::info!("creating repositories");
    let notifications_repository = NotificationsRepositoryImpl::new(store.clone());
    let notifications_repository = Arc::new(notifications_repository);
    let session_repository = SessionRepositoryImpl::new(store.clone());
    let session_repository = Arc::new(session_repository);

    tracing::info!("creating services");
    let language_settings_service = LanguageSettingsService::new(store).await;
    let language_settings_service = Arc::new(language_settings_service);

    let notifications_service = NotificationsServiceImpl::new(
        config,
        notifications_repository,
        session_repository,
        language_settings_service.clone(),
    );
    let notifications_service = Arc::new(notifications_service);

    ApplicationState {
        notifications_service,
        language_settings_service,
    }
}
