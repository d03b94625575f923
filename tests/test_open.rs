pub mod common;

use common::*;
use serde_json::json;
use std::sync::Arc;
use theftwatch_notifications::{
    application::{consume_events, create_state_with_store, render_report},
    auth::{Role, Session},
    dto::output::{AlertsTab, NavigationTarget},
    error::Error,
    repository::{FileKeyValueStore, KeyValueStore},
    service::notifications_service::NotificationsServiceConfig,
};
use time::OffsetDateTime;
use uuid::Uuid;

#[tokio::test]
async fn open_marks_read_and_navigates() -> anyhow::Result<()> {
    let (state, store) = create_state().await;
    let now = OffsetDateTime::now_utc();
    seed(
        &store,
        &[
            record(
                "response",
                json!({ "type": "alert_response", "threat_id": "t-1" }),
                now,
            ),
            record(
                "task",
                json!({ "type": "task_assigned", "threat_id": 7 }),
                now,
            ),
            record("other", json!({}), now),
        ],
    )
    .await;
    let service = &state.notifications_service;
    let admin = Session::new(None, Role::Admin);
    assert_eq!(service.count_unread(&admin).await, 1);

    let response = service.open("response").await?;
    let task = service.open("task").await?;
    let other = service.open("other").await?;

    assert_eq!(
        response,
        NavigationTarget::Alerts {
            threat_id: "t-1".to_string(),
            tab: AlertsTab::Reviewed,
        }
    );
    assert_eq!(
        task,
        NavigationTarget::Alerts {
            threat_id: "7".to_string(),
            tab: AlertsTab::Assigned,
        }
    );
    assert_eq!(other, NavigationTarget::TaskList);
    assert_eq!(service.count_unread(&admin).await, 0);
    assert!(service.load().await.iter().all(|n| n.read));

    Ok(())
}

#[tokio::test]
async fn open_missing_notification() -> anyhow::Result<()> {
    let (state, _) = create_state().await;

    let result = state.notifications_service.open("missing").await;

    assert!(matches!(result, Err(Error::NotificationNotExist)));

    Ok(())
}

#[tokio::test]
async fn mark_all_read_only_visible() -> anyhow::Result<()> {
    let (state, store) = create_state().await;
    let now = OffsetDateTime::now_utc();
    seed(
        &store,
        &[
            record(
                "mine",
                json!({ "type": "task_assigned", "assigned_user_ids": ["u1"] }),
                now,
            ),
            record(
                "theirs",
                json!({ "type": "task_assigned", "assigned_user_ids": ["u2"] }),
                now,
            ),
        ],
    )
    .await;
    let service = &state.notifications_service;

    let changed = service
        .mark_all_read(&Session::new(Some("u1".to_string()), Role::Employee))
        .await?;

    assert_eq!(changed, 1);
    let notifications = service.load().await;
    assert!(notifications[0].read);
    assert!(!notifications[1].read);

    Ok(())
}

#[tokio::test]
async fn clear_on_logout() -> anyhow::Result<()> {
    let (state, store) = create_state().await;
    seed(
        &store,
        &[record("a", json!({}), OffsetDateTime::now_utc())],
    )
    .await;

    state.notifications_service.clear().await?;

    assert!(state.notifications_service.load().await.is_empty());
    assert!(store.get("notifications").await?.is_none());

    Ok(())
}

#[tokio::test]
async fn file_storage_survives_restart() -> anyhow::Result<()> {
    let directory = std::env::temp_dir().join(format!("theftwatch_test_{}", Uuid::new_v4()));
    let events = concat!(
        r#"{"identifier":"push-1","content":{"title":"Task","body":"Aisle 4","data":{"type":"task_assigned","threat_id":"t-1"}}}"#,
        "\n",
        r#"{"identifier":"push-2","content":{"title":"Response","body":"Resolved","data":{"type":"alert_response","threat_id":"t-1","response":"false_alarm"}}}"#,
        "\n",
    );

    {
        let store = Arc::new(FileKeyValueStore::new(&directory).await?);
        let state = create_state_with_store(NotificationsServiceConfig::default(), store).await;
        let summary = consume_events(state.notifications_service.as_ref(), events.as_bytes()).await?;
        assert_eq!(summary.stored, 2);
    }

    let store = Arc::new(FileKeyValueStore::new(&directory).await?);
    store.set("userId", "u1").await?;
    store.set("userObj", r#"{"role":"admin"}"#).await?;
    let state = create_state_with_store(NotificationsServiceConfig::default(), store).await;

    let notifications = state.notifications_service.load().await;
    let report = render_report(&state).await?;
    let report = serde_json::from_str::<serde_json::Value>(&report)?;

    assert_eq!(notifications.len(), 2);
    assert_eq!(notifications[0].id, "push-2");
    assert_eq!(notifications[0].data.response.as_deref(), Some("false_alarm"));
    assert_eq!(report["user_id"], "u1");
    assert_eq!(report["unread"], 1);
    assert_eq!(report["buckets"][0]["label"], "today");
    assert_eq!(report["buckets"][0]["notifications"][0]["id"], "push-2");

    let _ = tokio::fs::remove_dir_all(directory).await;

    Ok(())
}
