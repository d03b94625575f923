use super::ApplicationState;
use serde::Serialize;

#[derive(Serialize)]
struct Report<'a> {
    user_id: Option<&'a str>,
    unread: usize,
    buckets: &'a [crate::dto::output::NotificationBucket],
}

///
/// Renders notifications visible to the logged in user as pretty JSON.
///
pub async fn render_report(state: &ApplicationState) -> anyhow::Result<String> {
    let service = &state.notifications_service;

    let session = service.find_session().await;
    let buckets = service.find_buckets(&session).await;
    let unread = service.count_unread(&session).await;

    let report = Report {
        user_id: session.user_id.as_deref(),
        unread,
        buckets: &buckets,
    };

    Ok(serde_json::to_string_pretty(&report)?)
}
