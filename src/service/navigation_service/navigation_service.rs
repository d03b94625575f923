use crate::{
    dto::output::{AlertsTab, NavigationTarget},
    repository::{NotificationRecord, NotificationType},
};

///
/// Picks the screen opened after tapping `notification`.
///
/// Alert responses open reviewed alerts, assigned tasks open assigned alerts.
/// Both require `threat_id`, without it the task list is opened.
///
pub fn resolve_navigation(notification: &NotificationRecord) -> NavigationTarget {
    let data = &notification.data;
    let tab = match data.notification_type() {
        Some(NotificationType::AlertResponse) => AlertsTab::Reviewed,
        Some(NotificationType::TaskAssigned) => AlertsTab::Assigned,
        None => return NavigationTarget::TaskList,
    };

    match &data.threat_id {
        Some(threat_id) if !threat_id.is_empty() => NavigationTarget::Alerts {
            threat_id: threat_id.clone(),
            tab,
        },
        _ => NavigationTarget::TaskList,
    }
}
