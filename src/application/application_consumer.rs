use crate::{
    dto::input,
    error::Error,
    service::notifications_service::{IngestOutcome, NotificationsService},
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConsumeSummary {
    pub stored: usize,
    pub duplicates: usize,
    pub abandoned: usize,
    pub invalid: usize,
}

///
/// Reads notification events, one JSON object per line,
/// and ingests them until the reader is exhausted.
///
/// Invalid lines are logged and skipped.
///
/// ### Errors
/// Only failures of the reader itself are returned.
///
#[tracing::instrument(name = "Notifications Consumer", skip_all)]
pub async fn consume_events<R>(
    notifications_service: &dyn NotificationsService,
    reader: R,
) -> std::io::Result<ConsumeSummary>
where
    R: AsyncBufRead + Unpin,
{
    let mut summary = ConsumeSummary::default();
    let mut lines = reader.lines();
    let mut line_number = 0usize;

    while let Some(line) = lines.next_line().await? {
        line_number += 1;
        if line.trim().is_empty() {
            continue;
        }

        let event = match parse_event(&line) {
            Ok(event) => event,
            Err(err) => {
                tracing::warn!(line_number, %err, "skipping line");
                summary.invalid += 1;
                continue;
            }
        };

        match notifications_service.ingest(event).await {
            IngestOutcome::Stored { .. } => summary.stored += 1,
            IngestOutcome::Duplicate => summary.duplicates += 1,
            IngestOutcome::Abandoned => summary.abandoned += 1,
        }
    }

    tracing::info!(?summary, "events consumed");

    Ok(summary)
}

fn parse_event(line: &str) -> Result<input::NotificationEvent, Error> {
    Ok(serde_json::from_str(line)?)
}
