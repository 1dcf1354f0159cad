use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Terminal classification of one credential validation attempt.
#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoginOutcome {
    Success,
    InvalidCredentials,
    NoInternetConnectivity,
    UnknownResponse,
    MalformedUrl,
    Unauthorized,
    CustomServerResponse,
    Timeout,
}

impl LoginOutcome {
    #[allow(missing_docs)]
    pub fn is_success(self) -> bool {
        self == LoginOutcome::Success
    }

    /// Message shown to the user when the server did not provide one.
    pub fn default_message(self) -> &'static str {
        match self {
            LoginOutcome::Success => "Login successful",
            LoginOutcome::InvalidCredentials => "Invalid username or password",
            LoginOutcome::NoInternetConnectivity => "No internet connection",
            LoginOutcome::UnknownResponse => "Login failed, please try again later",
            LoginOutcome::MalformedUrl => "The server url is not valid",
            LoginOutcome::Unauthorized => "You are not authorized to use this application",
            LoginOutcome::CustomServerResponse => "The server rejected the login",
            LoginOutcome::Timeout => "The server could not be reached, please try again",
        }
    }
}

impl fmt::Display for LoginOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_message())
    }
}

/// What the auth collaborator reports for one validation attempt.
///
/// Besides the outcome it may carry the server's own message (used with
/// [`LoginOutcome::CustomServerResponse`]) and the user details returned on success.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoginResponse {
    outcome: LoginOutcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    payload: Option<Value>,
}

impl LoginResponse {
    #[allow(missing_docs)]
    pub fn new(outcome: LoginOutcome) -> Self {
        Self {
            outcome,
            message: None,
            payload: None,
        }
    }

    /// Attaches the message the server sent along with the outcome.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attaches the user details document the server returned.
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    #[allow(missing_docs)]
    pub fn outcome(&self) -> LoginOutcome {
        self.outcome
    }

    /// The server's message, falling back to the outcome's default message.
    pub fn message(&self) -> &str {
        self.message
            .as_deref()
            .unwrap_or_else(|| self.outcome.default_message())
    }

    /// User details returned by the server on a successful login.
    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    /// The team the user belongs to, read from the user details at `team.team.uuid`.
    pub fn team_id(&self) -> Option<String> {
        self.payload
            .as_ref()?
            .pointer("/team/team/uuid")?
            .as_str()
            .map(str::to_string)
    }
}

impl From<LoginOutcome> for LoginResponse {
    fn from(outcome: LoginOutcome) -> Self {
        LoginResponse::new(outcome)
    }
}
