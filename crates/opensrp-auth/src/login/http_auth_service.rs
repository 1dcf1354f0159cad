use opensrp_core::ApiConfiguration;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

use super::{AuthService, LoginOutcome, LoginResponse};
use crate::Credentials;

const AUTHENTICATE_PATH: &str = "security/authenticate";

/// Auth service backed by the OpenSRP `security/authenticate` endpoint.
///
/// The credentials are sent with HTTP basic authentication. On success the server answers with
/// the user details document, which becomes the response payload.
pub struct HttpAuthService {
    config: ApiConfiguration,
}

impl HttpAuthService {
    /// Creates a service that validates through `config`.
    pub fn new(config: ApiConfiguration) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait]
impl AuthService for HttpAuthService {
    async fn validate_remote(&self, credentials: &Credentials) -> LoginResponse {
        let url = match self.config.url(AUTHENTICATE_PATH) {
            Ok(url) => url,
            Err(e) => {
                warn!("Cannot build login url: {e}");
                return LoginOutcome::MalformedUrl.into();
            }
        };

        let response = match self
            .config
            .client
            .get(url)
            .basic_auth(credentials.username(), Some(credentials.password()))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return transport_failure(&e).into(),
        };

        let status = response.status();
        match response.text().await {
            Ok(body) => classify_response(status, &body),
            Err(e) => transport_failure(&e).into(),
        }
    }
}

fn transport_failure(error: &reqwest::Error) -> LoginOutcome {
    debug!("Login request failed: {error}");
    if error.is_timeout() {
        LoginOutcome::Timeout
    } else if error.is_builder() {
        LoginOutcome::MalformedUrl
    } else {
        LoginOutcome::NoInternetConnectivity
    }
}

fn classify_response(status: StatusCode, body: &str) -> LoginResponse {
    match status {
        status if status.is_success() => match serde_json::from_str::<Value>(body) {
            Ok(user_details) => {
                LoginResponse::new(LoginOutcome::Success).with_payload(user_details)
            }
            Err(e) => {
                warn!("Login succeeded but user details could not be parsed: {e}");
                LoginOutcome::UnknownResponse.into()
            }
        },
        StatusCode::UNAUTHORIZED => LoginOutcome::InvalidCredentials.into(),
        StatusCode::FORBIDDEN => LoginOutcome::Unauthorized.into(),
        _ if !body.trim().is_empty() => {
            LoginResponse::new(LoginOutcome::CustomServerResponse).with_message(body.trim())
        }
        _ => LoginOutcome::UnknownResponse.into(),
    }
}
