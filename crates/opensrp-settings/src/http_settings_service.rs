use opensrp_core::{ApiConfiguration, ApiError};
use serde_json::Value;
use tracing::debug;

use crate::{SettingsPullError, SettingsPullRequest, SettingsService, SettingsServiceFactory};

const SETTINGS_SYNC_PATH: &str = "rest/settings/sync";

/// Settings service backed by the OpenSRP `rest/settings/sync` endpoint.
///
/// A first-time pull always asks for everything since server version `0`.
pub struct HttpSettingsService {
    config: ApiConfiguration,
    request: SettingsPullRequest,
}

impl HttpSettingsService {
    /// Creates a service that pulls with `request` through `config`.
    pub fn new(config: ApiConfiguration, request: SettingsPullRequest) -> Self {
        Self { config, request }
    }
}

#[async_trait::async_trait]
impl SettingsService for HttpSettingsService {
    async fn pull_settings_from_server(&self) -> Result<Value, SettingsPullError> {
        let mut url = self.config.url(SETTINGS_SYNC_PATH)?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("serverVersion", "0");
            if let Some(team_id) = &self.request.team_id {
                query.append_pair("teamId", team_id);
            }
        }

        debug!(team_id = ?self.request.team_id, "Pulling settings from server");

        let response = self
            .config
            .client
            .get(url)
            .basic_auth(&self.request.username, Some(&self.request.password))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        let body = response.text().await.map_err(ApiError::from)?;

        if !status.is_success() {
            return Err(ApiError::ResponseContent {
                status,
                message: body,
            }
            .into());
        }

        serde_json::from_str(&body).map_err(SettingsPullError::MalformedResponse)
    }
}

/// Produces [`HttpSettingsService`]s that share one server location and transport.
#[derive(Debug, Clone)]
pub struct HttpSettingsServiceFactory {
    config: ApiConfiguration,
}

impl HttpSettingsServiceFactory {
    /// Creates a factory that sends every pull through `config`.
    pub fn new(config: ApiConfiguration) -> Self {
        Self { config }
    }
}

impl SettingsServiceFactory for HttpSettingsServiceFactory {
    fn create(&self, request: SettingsPullRequest) -> Box<dyn SettingsService> {
        Box::new(HttpSettingsService::new(self.config.clone(), request))
    }
}
