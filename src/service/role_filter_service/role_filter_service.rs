use super::UnknownRolePolicy;
use crate::{
    auth::{Role, Session},
    repository::{NotificationRecord, NotificationType},
};

pub struct RoleFilterService {
    unknown_role_policy: UnknownRolePolicy,
}

impl RoleFilterService {
    pub fn new(unknown_role_policy: UnknownRolePolicy) -> Self {
        Self {
            unknown_role_policy,
        }
    }

    ///
    /// Decides whether notification should be presented to the session user.
    ///
    /// - admins see responses to alerts
    /// - employees see tasks assigned to them. Notifications without
    ///   `assigned_user_ids` were stored by older versions and are shown to every employee
    /// - everyone else is handled by [UnknownRolePolicy]
    ///
    pub fn is_visible(&self, notification: &NotificationRecord, session: &Session) -> bool {
        let notification_type = notification.data.notification_type();

        match &session.role {
            Role::Admin => notification_type == Some(NotificationType::AlertResponse),
            Role::Employee => {
                if notification_type != Some(NotificationType::TaskAssigned) {
                    return false;
                }

                match (&notification.data.assigned_user_ids, &session.user_id) {
                    (None, _) => true,
                    (Some(assigned_user_ids), Some(user_id)) => assigned_user_ids.contains(user_id),
                    (Some(_), None) => false,
                }
            }
            Role::Other(_) => match self.unknown_role_policy {
                UnknownRolePolicy::ShowAll => true,
                UnknownRolePolicy::ShowNone => false,
            },
        }
    }

    ///
    /// Keeps notifications visible to the session user.
    /// Order of notifications is preserved.
    ///
    pub fn filter(
        &self,
        notifications: Vec<NotificationRecord>,
        session: &Session,
    ) -> Vec<NotificationRecord> {
        let len_before = notifications.len();
        let notifications = notifications
            .into_iter()
            .filter(|notification| self.is_visible(notification, session))
            .collect::<Vec<_>>();

        tracing::trace!(
            role = ?session.role,
            len_before,
            len_after = notifications.len(),
            "filtered notifications"
        );

        notifications
    }
}
