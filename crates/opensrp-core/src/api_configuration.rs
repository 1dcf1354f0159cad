use reqwest::Url;

use crate::{ApiError, ClientSettings, InvalidBaseUrlError};

/// Resolved configuration used by the HTTP collaborators.
///
/// The `reqwest::Client` is shared: cloning an `ApiConfiguration` reuses the same connection
/// pool.
#[derive(Debug, Clone)]
pub struct ApiConfiguration {
    /// Base path of the server, without a trailing slash.
    pub base_path: String,
    /// Transport shared by every request built from this configuration.
    pub client: reqwest::Client,
}

impl ApiConfiguration {
    /// Builds the transport described by `settings`.
    ///
    /// The base url is not validated here; an unusable url surfaces when a request is built so
    /// callers can report it as a login outcome.
    pub fn new(settings: &ClientSettings) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder().user_agent(settings.user_agent.clone());
        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_path: settings.base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    /// Joins `path` onto the base path and parses the result.
    pub fn url(&self, path: &str) -> Result<Url, InvalidBaseUrlError> {
        let raw = format!("{}/{}", self.base_path, path.trim_start_matches('/'));
        let url = Url::parse(&raw).map_err(|e| InvalidBaseUrlError {
            url: self.base_path.clone(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(InvalidBaseUrlError {
                url: self.base_path.clone(),
                reason: format!("unsupported scheme `{}`", url.scheme()),
            });
        }

        Ok(url)
    }
}
