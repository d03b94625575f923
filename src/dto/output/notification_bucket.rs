use crate::repository::NotificationRecord;
use serde::Serialize;
use time::Date;

///
/// Notifications received on the same calendar day.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationBucket {
    pub label: BucketLabel,
    /// Label translated to the display language
    pub title: String,
    #[serde(with = "se_iso_date")]
    pub day: Date,
    pub notifications: Vec<NotificationRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketLabel {
    Today,
    Yesterday,
    Date,
}

mod se_iso_date {
    use serde::{Serialize, Serializer};
    use time::{macros::format_description, Date};

    pub fn serialize<S: Serializer>(v: &Date, s: S) -> Result<S::Ok, S::Error> {
        let formatted = v
            .format(format_description!("[year]-[month]-[day]"))
            .map_err(serde::ser::Error::custom)?;

        String::serialize(&formatted, s)
    }
}
