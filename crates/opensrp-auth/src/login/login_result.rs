use opensrp_settings::SettingsEnvelope;

use super::{LoginOutcome, LoginResponse};

/// Final result of one login attempt, handed to the [`LoginListener`](super::LoginListener).
///
/// Settings are only ever attached to a successful response, and only when they were pulled
/// during this attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginResult {
    response: LoginResponse,
    settings: Option<SettingsEnvelope>,
}

impl LoginResult {
    pub(crate) fn new(response: LoginResponse) -> Self {
        Self {
            response,
            settings: None,
        }
    }

    pub(crate) fn with_settings(response: LoginResponse, settings: SettingsEnvelope) -> Self {
        debug_assert!(
            response.outcome().is_success(),
            "settings attached to a failed login"
        );
        Self {
            response,
            settings: Some(settings),
        }
    }

    #[allow(missing_docs)]
    pub fn outcome(&self) -> LoginOutcome {
        self.response.outcome()
    }

    #[allow(missing_docs)]
    pub fn response(&self) -> &LoginResponse {
        &self.response
    }

    /// Settings pulled during a first login on this device.
    pub fn settings(&self) -> Option<&SettingsEnvelope> {
        self.settings.as_ref()
    }
}
