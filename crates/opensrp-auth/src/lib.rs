#![doc = include_str!("../README.md")]

mod credentials;
pub mod login;

pub use credentials::Credentials;
pub use login::{
    AuthService, DeviceState, HttpAuthService, LoginListener, LoginOrchestrator, LoginOutcome,
    LoginPresenter, LoginResponse, LoginResult, LoginTask, LoginTaskState, ProgressMessage,
};
