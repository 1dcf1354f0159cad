//! Login module
//! Validates a user's credentials against an OpenSRP server and, on the first successful login
//! on a device, pulls the team's settings before reporting the result.
mod auth_service;
mod http_auth_service;
mod login_outcome;
mod login_result;
mod orchestrator;
mod presenter;

pub use auth_service::{AuthService, DeviceState};
pub use http_auth_service::HttpAuthService;
pub use login_outcome::{LoginOutcome, LoginResponse};
pub use login_result::LoginResult;
pub use orchestrator::{LoginOrchestrator, LoginTask, LoginTaskState};
pub use presenter::{LoginListener, LoginPresenter, ProgressMessage};

#[cfg(test)]
pub(crate) use auth_service::{MockAuthService, MockDeviceState};
