mod language;
mod language_settings_service;

pub use language::*;
pub use language_settings_service::*;
