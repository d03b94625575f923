use super::{IngestOutcome, NotificationsService, NotificationsServiceConfig};
use crate::{
    auth::Session,
    dto::{input, output},
    error::Error,
    repository::{NotificationRecord, NotificationsRepository, SessionRepository},
    service::{
        date_bucket_service::DateBucketService,
        language_settings_service::LanguageSettingsService,
        navigation_service::resolve_navigation,
        notifications_deduplication_service::NotificationsDeduplicationService,
        role_filter_service::RoleFilterService,
    },
};
use async_trait::async_trait;
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use uuid::Uuid;

pub struct NotificationsServiceImpl {
    notifications_repository: Arc<dyn NotificationsRepository>,
    session_repository: Arc<dyn SessionRepository>,
    language_settings_service: Arc<LanguageSettingsService>,
    deduplication_service: NotificationsDeduplicationService,
    role_filter_service: RoleFilterService,
    date_bucket_service: DateBucketService,

    /// Serializes load-modify-save cycles on stored notifications
    write_lock: Mutex<()>,
}

impl NotificationsServiceImpl {
    pub fn new(
        config: NotificationsServiceConfig,
        notifications_repository: Arc<dyn NotificationsRepository>,
        session_repository: Arc<dyn SessionRepository>,
        language_settings_service: Arc<LanguageSettingsService>,
    ) -> Self {
        Self {
            notifications_repository,
            session_repository,
            language_settings_service,
            deduplication_service: NotificationsDeduplicationService::new(config.deduplication),
            role_filter_service: RoleFilterService::new(config.unknown_role_policy),
            date_bucket_service: DateBucketService::new(config.utc_offset),
            write_lock: Mutex::new(()),
        }
    }

    fn create_record(event: input::NotificationEvent, now: OffsetDateTime) -> NotificationRecord {
        let input::NotificationEvent {
            identifier,
            content,
        } = event;

        let id = identifier
            .filter(|identifier| !identifier.is_empty())
            .unwrap_or_else(|| Self::generate_id(now));

        NotificationRecord {
            id,
            title: content.title.unwrap_or_default(),
            body: content.body.unwrap_or_default(),
            data: content.data.unwrap_or_default(),
            date: now,
            read: false,
        }
    }

    ///
    /// Generates id in format `notif_<unix millis>_<random suffix>`
    ///
    fn generate_id(now: OffsetDateTime) -> String {
        let millis = now.unix_timestamp_nanos() / 1_000_000;
        let random = Uuid::new_v4().simple().to_string();

        format!("notif_{millis}_{}", &random[..9])
    }

    async fn load_sorted(&self) -> Vec<NotificationRecord> {
        let mut notifications = self.load().await;
        self.date_bucket_service.sort(&mut notifications);

        notifications
    }

    async fn load_visible(&self, session: &Session) -> Vec<NotificationRecord> {
        let notifications = self.load_sorted().await;

        self.role_filter_service.filter(notifications, session)
    }
}

#[async_trait]
impl NotificationsService for NotificationsServiceImpl {
    #[tracing::instrument(
        name = "Ingest notification",
        skip_all,
        fields(
            identifier = ?event.identifier,
        )
    )]
    async fn ingest(&self, event: input::NotificationEvent) -> IngestOutcome {
        let candidate = Self::create_record(event, OffsetDateTime::now_utc());
        let id = candidate.id.clone();
        tracing::info!(id, "ingesting notification");

        let _guard = self.write_lock.lock().await;

        let stored = match self.notifications_repository.load().await {
            Ok(stored) => stored,
            Err(err) => {
                tracing::warn!(%err, "failed to load notifications, notification abandoned");
                return IngestOutcome::Abandoned;
            }
        };

        let Some(notifications) = self.deduplication_service.deduplicate(candidate, stored) else {
            tracing::info!(id, "duplicate notification skipped");
            return IngestOutcome::Duplicate;
        };

        match self.notifications_repository.save(&notifications).await {
            Ok(()) => {
                tracing::info!(id, count = notifications.len(), "notification stored");
                IngestOutcome::Stored { id }
            }
            Err(err) => {
                tracing::warn!(%err, "failed to save notifications, notification abandoned");
                IngestOutcome::Abandoned
            }
        }
    }

    async fn load(&self) -> Vec<NotificationRecord> {
        match self.notifications_repository.load().await {
            Ok(notifications) => notifications,
            Err(err) => {
                tracing::warn!(%err, "failed to load notifications");
                Vec::new()
            }
        }
    }

    async fn find_session(&self) -> Session {
        match self.session_repository.find_session().await {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!(%err, "failed to read session");
                Session::anonymous()
            }
        }
    }

    #[tracing::instrument(name = "Find buckets", skip_all, fields(role = ?session.role))]
    async fn find_buckets(&self, session: &Session) -> Vec<output::NotificationBucket> {
        let notifications = self.load_visible(session).await;
        tracing::debug!(count = notifications.len(), "found visible notifications");

        self.date_bucket_service.bucket(
            notifications,
            OffsetDateTime::now_utc(),
            self.language_settings_service.current(),
        )
    }

    async fn count_unread(&self, session: &Session) -> usize {
        self.load_visible(session)
            .await
            .iter()
            .filter(|notification| !notification.read)
            .count()
    }

    #[tracing::instrument(name = "Mark read", skip(self))]
    async fn mark_read(&self, id: &str) -> Result<(), Error> {
        let _guard = self.write_lock.lock().await;

        let mut notifications = self.notifications_repository.load().await?;
        let notification = notifications
            .iter_mut()
            .find(|notification| notification.id == id)
            .ok_or(Error::NotificationNotExist)?;

        if notification.read {
            tracing::debug!("notification already read");
            return Ok(());
        }

        notification.read = true;
        self.notifications_repository.save(&notifications).await?;
        tracing::info!("marked notification as read");

        Ok(())
    }

    #[tracing::instrument(name = "Mark all read", skip_all, fields(role = ?session.role))]
    async fn mark_all_read(&self, session: &Session) -> Result<usize, Error> {
        let _guard = self.write_lock.lock().await;

        let mut notifications = self.notifications_repository.load().await?;
        let mut changed = 0;
        for notification in notifications.iter_mut() {
            if !notification.read && self.role_filter_service.is_visible(notification, session) {
                notification.read = true;
                changed += 1;
            }
        }

        if changed > 0 {
            self.notifications_repository.save(&notifications).await?;
        }
        tracing::info!(changed, "marked notifications as read");

        Ok(changed)
    }

    #[tracing::instrument(name = "Open notification", skip(self))]
    async fn open(&self, id: &str) -> Result<output::NavigationTarget, Error> {
        let notifications = self.load().await;
        let notification = notifications
            .iter()
            .find(|notification| notification.id == id)
            .ok_or(Error::NotificationNotExist)?;

        let target = resolve_navigation(notification);
        tracing::debug!(?target, "resolved navigation");

        match self.mark_read(id).await {
            Ok(()) => {}
            Err(Error::NotificationNotExist) => {
                tracing::debug!("notification disappeared before it was marked as read");
            }
            Err(err) => tracing::warn!(%err, "failed to mark notification as read"),
        }

        Ok(target)
    }

    async fn clear(&self) -> Result<(), Error> {
        let _guard = self.write_lock.lock().await;

        self.notifications_repository.clear().await?;
        tracing::info!("cleared notifications");

        Ok(())
    }
}
