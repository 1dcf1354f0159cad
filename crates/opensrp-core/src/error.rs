//! Errors that can occur when talking to an OpenSRP server

use reqwest::StatusCode;
use thiserror::Error;

/// Errors from performing network requests.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    #[error("Received error message from server: [{}] {}", .status, .message)]
    ResponseContent { status: StatusCode, message: String },
}

/// The configured base url could not be parsed.
#[derive(Debug, Error)]
#[error("Invalid base url `{url}`: {reason}")]
pub struct InvalidBaseUrlError {
    /// The url as configured.
    pub url: String,
    /// Why the url was rejected.
    pub reason: String,
}
