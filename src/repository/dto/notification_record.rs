use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{AsRefStr, EnumString};
use time::OffsetDateTime;

///
/// Single stored notification together with its routing metadata.
///
/// `date` is the moment the notification was received by the device,
/// not the moment the underlying event happened.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub id: String,
    #[serde(default, deserialize_with = "de_null_default::deserialize")]
    pub title: String,
    #[serde(default, deserialize_with = "de_null_default::deserialize")]
    pub body: String,
    #[serde(default, deserialize_with = "de_null_default::deserialize")]
    pub data: NotificationData,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    #[serde(default, deserialize_with = "de_null_default::deserialize")]
    pub read: bool,
}

///
/// Open key-value map attached to a notification.
///
/// Recognized keys have their own fields, everything else
/// is kept in `extra` so it survives a load/save cycle.
///
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationData {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de_string_or_number::deserialize"
    )]
    pub threat_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_user_ids: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
pub enum NotificationType {
    #[strum(serialize = "task_assigned")]
    TaskAssigned,
    #[strum(serialize = "alert_response")]
    AlertResponse,
}

impl NotificationData {
    ///
    /// Returns recognized notification type.
    /// Missing and unknown `type` values both give None.
    ///
    pub fn notification_type(&self) -> Option<NotificationType> {
        self.kind.as_deref().and_then(|kind| kind.parse().ok())
    }
}

mod de_string_or_number {
    //!
    //! Threat ids arrive either as JSON strings or as numbers
    //! depending on which backend endpoint produced the push.
    //! Both are normalized to a string.
    //!

    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let value = Option::<Value>::deserialize(d)?;
        match value {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(string)) => Ok(Some(string)),
            Some(Value::Number(number)) => Ok(Some(number.to_string())),
            Some(other) => Err(serde::de::Error::custom(format!(
                "threat_id must be a string or a number, got {other}"
            ))),
        }
    }
}

mod de_null_default {
    //!
    //! Data-only pushes are stored with `null` title and body.
    //! `null` is read as the field's default value.
    //!

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(d: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Option::<T>::deserialize(d).map(Option::unwrap_or_default)
    }
}
