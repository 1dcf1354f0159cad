use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Basic client behavior settings. These settings specify which OpenSRP server the login flow
/// talks to and how requests are sent. They are optional and uneditable once the HTTP
/// collaborators are built.
///
/// Defaults to
///
/// ```
/// # use opensrp_core::ClientSettings;
/// let settings = ClientSettings {
///     base_url: "http://localhost:8080/opensrp".to_string(),
///     user_agent: "OpenSRP Rust-Client".to_string(),
///     timeout_secs: 60,
/// };
/// let default = ClientSettings::default();
/// # assert_eq!(settings, default);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ClientSettings {
    /// The base url of the targeted OpenSRP server, without a trailing slash. Defaults to
    /// `http://localhost:8080/opensrp`
    pub base_url: String,
    /// The user agent sent to the server. Defaults to `OpenSRP Rust-Client`
    pub user_agent: String,
    /// Per-request timeout in seconds. Requests exceeding it are reported as timeouts. `0`
    /// disables the timeout.
    pub timeout_secs: u64,
}

impl ClientSettings {
    /// The per-request timeout, or `None` when it is disabled.
    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/opensrp".into(),
            user_agent: "OpenSRP Rust-Client".into(),
            timeout_secs: 60,
        }
    }
}
