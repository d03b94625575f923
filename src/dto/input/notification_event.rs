use crate::repository::NotificationData;
use serde::Deserialize;

///
/// Push or local notification as delivered by the notification source.
///
#[derive(Debug, Deserialize)]
pub struct NotificationEvent {
    #[serde(default)]
    pub identifier: Option<String>,
    pub content: NotificationEventContent,
}

#[derive(Debug, Deserialize)]
pub struct NotificationEventContent {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub data: Option<NotificationData>,
}
