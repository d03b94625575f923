use crate::service::role_filter_service::UnknownRolePolicy;
use anyhow::anyhow;
use std::{path::PathBuf, time::Duration};
use time::{macros::format_description, UtcOffset};

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub storage_directory: PathBuf,

    pub max_stored_notifications: usize,
    pub duplicate_window: Duration,
    pub unknown_role_policy: UnknownRolePolicy,

    /// Defaults to the offset of the machine when not set
    pub utc_offset: UtcOffset,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("THEFTWATCH_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("THEFTWATCH_LOG_FILENAME")?;
        let storage_directory = Self::env_var("THEFTWATCH_STORAGE_DIRECTORY")?.into();
        let max_stored_notifications = match Self::optional_env_var("THEFTWATCH_MAX_STORED_NOTIFICATIONS") {
            Some(value) => value.parse()?,
            None => 100,
        };
        let duplicate_window = match Self::optional_env_var("THEFTWATCH_DUPLICATE_WINDOW_MS") {
            Some(value) => Duration::from_millis(value.parse()?),
            None => Duration::from_millis(5000),
        };
        let unknown_role_policy = match Self::optional_env_var("THEFTWATCH_UNKNOWN_ROLE_POLICY") {
            Some(value) => value.parse().map_err(|_| {
                anyhow!("THEFTWATCH_UNKNOWN_ROLE_POLICY must be one of: show_all, show_none")
            })?,
            None => UnknownRolePolicy::default(),
        };
        let utc_offset = match Self::optional_env_var("THEFTWATCH_UTC_OFFSET") {
            Some(value) => Self::parse_utc_offset(&value)?,
            None => UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC),
        };

        if max_stored_notifications == 0 {
            anyhow::bail!("THEFTWATCH_MAX_STORED_NOTIFICATIONS must be greater than 0");
        }

        Ok(Self {
            log_directory,
            log_filename,
            storage_directory,
            max_stored_notifications,
            duplicate_window,
            unknown_role_policy,
            utc_offset,
        })
    }

    fn parse_utc_offset(value: &str) -> anyhow::Result<UtcOffset> {
        UtcOffset::parse(
            value,
            format_description!("[offset_hour sign:mandatory]:[offset_minute]"),
        )
        .map_err(|err| anyhow!("THEFTWATCH_UTC_OFFSET invalid, expected format +HH:MM: {err}"))
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }

    fn optional_env_var(name: &'static str) -> Option<String> {
        std::env::var(name).ok().filter(|value| !value.is_empty())
    }
}
