#![doc = include_str!("../README.md")]

mod api_configuration;
mod client_settings;
mod error;

pub use api_configuration::ApiConfiguration;
pub use client_settings::ClientSettings;
pub use error::{ApiError, InvalidBaseUrlError};
