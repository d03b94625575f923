use serde::Serialize;
use strum::AsRefStr;

///
/// Screen the app should open after the user taps a notification.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum NavigationTarget {
    Alerts { threat_id: String, tab: AlertsTab },
    TaskList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AlertsTab {
    Reviewed,
    Assigned,
}
