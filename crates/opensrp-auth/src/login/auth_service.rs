use crate::{login::LoginResponse, Credentials};

/// Validates credentials against the remote authority.
///
/// Expected failures (no network, bad url, timeouts, unexpected responses) are reported as
/// [`LoginOutcome`](super::LoginOutcome) variants, never as errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    #[allow(missing_docs)]
    async fn validate_remote(&self, credentials: &Credentials) -> LoginResponse;
}

/// Read-only view of what this device already knows about its user.
#[cfg_attr(test, mockall::automock)]
pub trait DeviceState: Send + Sync {
    /// Whether a password from an earlier successful login is stored on this device.
    fn has_stored_password(&self) -> bool;
}
