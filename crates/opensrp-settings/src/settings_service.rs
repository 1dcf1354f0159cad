use std::fmt;

use opensrp_core::{ApiError, InvalidBaseUrlError};
use serde_json::Value;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum SettingsPullError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    InvalidBaseUrl(#[from] InvalidBaseUrlError),
    #[error("Malformed settings response: {0}")]
    MalformedResponse(#[source] serde_json::Error),
}

/// Everything a settings service needs to know about the user it pulls for.
///
/// The server location and the transport are owned by the [`SettingsServiceFactory`].
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SettingsPullRequest {
    /// Username the settings are pulled for.
    pub username: String,
    /// Password used to authenticate the pull.
    pub password: String,
    /// Team whose settings are pulled. `None` pulls without a team filter.
    #[zeroize(skip)]
    pub team_id: Option<String>,
}

impl fmt::Debug for SettingsPullRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsPullRequest")
            .field("username", &self.username)
            .field("password", &"********")
            .field("team_id", &self.team_id)
            .finish()
    }
}

/// Pulls the settings document of one user and team from the server.
#[async_trait::async_trait]
pub trait SettingsService: Send + Sync {
    /// Fetches the settings document. A response that is not a JSON document is reported as
    /// [`SettingsPullError::MalformedResponse`].
    async fn pull_settings_from_server(&self) -> Result<Value, SettingsPullError>;
}

/// Builds a [`SettingsService`] configured for one pull.
pub trait SettingsServiceFactory: Send + Sync {
    /// Creates a service that pulls the settings described by `request`.
    fn create(&self, request: SettingsPullRequest) -> Box<dyn SettingsService>;
}
