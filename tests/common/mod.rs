use serde_json::{json, Value};
use std::sync::Arc;
use theftwatch_notifications::{
    application::{create_state_with_store, ApplicationState},
    dto::input::NotificationEvent,
    repository::{KeyValueStore, MemoryKeyValueStore, NotificationRecord},
    service::notifications_service::NotificationsServiceConfig,
};
use time::OffsetDateTime;

pub async fn create_state() -> (ApplicationState, Arc<MemoryKeyValueStore>) {
    let store = Arc::new(MemoryKeyValueStore::new());
    let state = create_state_with_store(NotificationsServiceConfig::default(), store.clone()).await;

    (state, store)
}

pub async fn login(store: &MemoryKeyValueStore, user_id: &str, role: &str) {
    store.set("userId", user_id).await.unwrap();
    store
        .set("userObj", &json!({ "role": role }).to_string())
        .await
        .unwrap();
}

pub fn event(identifier: Option<&str>, title: &str, body: &str, data: Value) -> NotificationEvent {
    serde_json::from_value(json!({
        "identifier": identifier,
        "content": {
            "title": title,
            "body": body,
            "data": data,
        }
    }))
    .unwrap()
}

pub fn record(id: &str, data: Value, date: OffsetDateTime) -> NotificationRecord {
    NotificationRecord {
        id: id.to_string(),
        title: format!("title {id}"),
        body: format!("body {id}"),
        data: serde_json::from_value(data).unwrap(),
        date,
        read: false,
    }
}

pub async fn seed(store: &MemoryKeyValueStore, notifications: &[NotificationRecord]) {
    store
        .set("notifications", &serde_json::to_string(notifications).unwrap())
        .await
        .unwrap();
}
