use crate::{
    dto::output::{BucketLabel, NotificationBucket},
    repository::NotificationRecord,
    service::language_settings_service::Language,
};
use std::collections::BTreeMap;
use time::{Date, OffsetDateTime, UtcOffset};

///
/// Groups notifications by the calendar day they were received on.
/// Calendar days are computed in `utc_offset`.
///
pub struct DateBucketService {
    utc_offset: UtcOffset,
}

impl DateBucketService {
    pub fn new(utc_offset: UtcOffset) -> Self {
        Self { utc_offset }
    }

    ///
    /// Sorts notifications newest first.
    /// Sort is stable so notifications with equal dates keep their relative order.
    ///
    pub fn sort(&self, notifications: &mut [NotificationRecord]) {
        notifications.sort_by(|a, b| b.date.cmp(&a.date));
    }

    ///
    /// Splits notifications into per day buckets.
    ///
    /// Buckets are ordered: today, yesterday, then remaining days
    /// from the most recent. Notifications inside a bucket are sorted newest first.
    /// Empty input gives no buckets.
    ///
    pub fn bucket(
        &self,
        mut notifications: Vec<NotificationRecord>,
        now: OffsetDateTime,
        language: Language,
    ) -> Vec<NotificationBucket> {
        self.sort(&mut notifications);

        let mut days = BTreeMap::<Date, Vec<NotificationRecord>>::new();
        for notification in notifications {
            let day = notification.date.to_offset(self.utc_offset).date();
            days.entry(day).or_default().push(notification);
        }

        let today = now.to_offset(self.utc_offset).date();
        let yesterday = today.previous_day();

        let mut buckets = Vec::with_capacity(days.len());
        if let Some(notifications) = days.remove(&today) {
            buckets.push(NotificationBucket {
                label: BucketLabel::Today,
                title: language.today().to_string(),
                day: today,
                notifications,
            });
        }
        if let Some((day, notifications)) =
            yesterday.and_then(|day| days.remove_entry(&day))
        {
            buckets.push(NotificationBucket {
                label: BucketLabel::Yesterday,
                title: language.yesterday().to_string(),
                day,
                notifications,
            });
        }
        for (day, notifications) in days.into_iter().rev() {
            buckets.push(NotificationBucket {
                label: BucketLabel::Date,
                title: language.short_date(day),
                day,
                notifications,
            });
        }

        buckets.retain(|bucket| !bucket.notifications.is_empty());
        tracing::trace!(buckets = buckets.len(), "bucketed notifications");

        buckets
    }
}
