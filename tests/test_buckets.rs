pub mod common;

use common::*;
use serde_json::json;
use std::time::Duration;
use theftwatch_notifications::{
    auth::{Role, Session},
    dto::output::{BucketLabel, NotificationBucket},
    service::language_settings_service::Language,
};
use time::OffsetDateTime;

const DAY: Duration = Duration::from_secs(24 * 3600);

fn summary(buckets: &[NotificationBucket]) -> Vec<(BucketLabel, Vec<&str>)> {
    buckets
        .iter()
        .map(|bucket| {
            let ids = bucket
                .notifications
                .iter()
                .map(|n| n.id.as_str())
                .collect();
            (bucket.label, ids)
        })
        .collect()
}

#[tokio::test]
async fn buckets_today_yesterday_and_older() -> anyhow::Result<()> {
    let (state, store) = create_state().await;
    let now = OffsetDateTime::now_utc();
    let data = json!({ "type": "alert_response" });
    seed(
        &store,
        &[
            record("older", data.clone(), now - 10 * DAY),
            record("yesterday", data.clone(), now - DAY),
            record("today", data, now),
        ],
    )
    .await;
    let session = Session::new(Some("admin-1".to_string()), Role::Admin);

    let buckets = state.notifications_service.find_buckets(&session).await;

    assert_eq!(
        summary(&buckets),
        [
            (BucketLabel::Today, vec!["today"]),
            (BucketLabel::Yesterday, vec!["yesterday"]),
            (BucketLabel::Date, vec!["older"]),
        ]
    );
    assert_eq!(buckets[0].title, "Today");
    assert_eq!(
        buckets[2].title,
        Language::English.short_date((now - 10 * DAY).date())
    );

    Ok(())
}

#[tokio::test]
async fn buckets_idempotent() -> anyhow::Result<()> {
    let (state, store) = create_state().await;
    let now = OffsetDateTime::now_utc();
    let data = json!({ "type": "task_assigned" });
    seed(
        &store,
        &[
            record("a", data.clone(), now),
            record("b", data.clone(), now),
            record("c", data.clone(), now - 3 * DAY),
            record("d", data, now - 3 * DAY),
        ],
    )
    .await;
    let session = Session::new(Some("u1".to_string()), Role::Employee);

    let first = state.notifications_service.find_buckets(&session).await;
    let second = state.notifications_service.find_buckets(&session).await;

    assert_eq!(first, second);
    assert_eq!(
        summary(&first),
        [
            (BucketLabel::Today, vec!["a", "b"]),
            (BucketLabel::Date, vec!["c", "d"]),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn buckets_employee_sees_own_tasks() -> anyhow::Result<()> {
    let (state, store) = create_state().await;
    let now = OffsetDateTime::now_utc();
    seed(
        &store,
        &[
            record(
                "assigned",
                json!({ "type": "task_assigned", "assigned_user_ids": ["u1", "u2"] }),
                now,
            ),
            record("legacy", json!({ "type": "task_assigned" }), now),
            record("alert", json!({ "type": "alert_response" }), now),
        ],
    )
    .await;

    login(&store, "u1", "employee").await;
    let session = state.notifications_service.find_session().await;
    let buckets = state.notifications_service.find_buckets(&session).await;
    assert_eq!(
        summary(&buckets),
        [(BucketLabel::Today, vec!["assigned", "legacy"])]
    );

    login(&store, "u3", "employee").await;
    let session = state.notifications_service.find_session().await;
    let buckets = state.notifications_service.find_buckets(&session).await;
    assert_eq!(summary(&buckets), [(BucketLabel::Today, vec!["legacy"])]);

    Ok(())
}

#[tokio::test]
async fn buckets_admin_never_sees_tasks() -> anyhow::Result<()> {
    let (state, store) = create_state().await;
    let now = OffsetDateTime::now_utc();
    seed(
        &store,
        &[
            record(
                "task",
                json!({ "type": "task_assigned", "assigned_user_ids": ["admin-1"] }),
                now,
            ),
            record("response", json!({ "type": "alert_response" }), now),
        ],
    )
    .await;
    login(&store, "admin-1", "admin").await;

    let session = state.notifications_service.find_session().await;
    let buckets = state.notifications_service.find_buckets(&session).await;

    assert_eq!(summary(&buckets), [(BucketLabel::Today, vec!["response"])]);

    Ok(())
}

#[tokio::test]
async fn buckets_follow_language_changes() -> anyhow::Result<()> {
    let (state, store) = create_state().await;
    seed(
        &store,
        &[record(
            "a",
            json!({ "type": "alert_response" }),
            OffsetDateTime::now_utc(),
        )],
    )
    .await;
    let session = Session::new(None, Role::Admin);
    let mut language = state.language_settings_service.subscribe();

    state.language_settings_service.set(Language::French).await?;
    let buckets = state.notifications_service.find_buckets(&session).await;

    assert!(language.has_changed()?);
    assert_eq!(*language.borrow_and_update(), Language::French);
    assert_eq!(buckets[0].title, "Aujourd'hui");

    Ok(())
}

#[tokio::test]
async fn buckets_empty_storage() -> anyhow::Result<()> {
    let (state, _) = create_state().await;

    let session = state.notifications_service.find_session().await;
    let buckets = state.notifications_service.find_buckets(&session).await;

    assert!(buckets.is_empty());

    Ok(())
}
