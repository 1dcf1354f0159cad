#![doc = include_str!("../README.md")]

mod envelope;
mod http_settings_service;
mod key;
mod settings_service;

pub use envelope::{SettingsEnvelope, SITE_CHARACTERISTICS};
pub use http_settings_service::{HttpSettingsService, HttpSettingsServiceFactory};
pub use key::Key;
pub use settings_service::{
    SettingsPullError, SettingsPullRequest, SettingsService, SettingsServiceFactory,
};
