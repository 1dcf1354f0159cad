use std::fmt;

use super::{LoginResponse, LoginResult};

/// Progress notices emitted while a login is running.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgressMessage {
    LoadingClientSettings,
}

impl ProgressMessage {
    /// Text shown to the user.
    pub fn text(self) -> &'static str {
        match self {
            ProgressMessage::LoadingClientSettings => "Loading client settings...",
        }
    }
}

impl fmt::Display for ProgressMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// The presentation layer driving a login.
///
/// A presenter is bound to the thread that started the login and does not need to be `Send`
/// or `Sync`. Every call is made on that thread, one at a time.
pub trait LoginPresenter: 'static {
    /// Enters (`true`) or leaves (`false`) the busy state.
    fn show_progress(&self, show: bool);

    #[allow(missing_docs)]
    fn update_progress_message(&self, message: ProgressMessage);

    /// The team whose settings are pulled after a first login.
    ///
    /// Defaults to the team found in the server's user details.
    fn user_team_id(&self, response: &LoginResponse) -> Option<String> {
        response.team_id()
    }
}

/// Receives the result of a login that was not cancelled.
pub trait LoginListener: Send + 'static {
    #[allow(missing_docs)]
    fn on_event(self: Box<Self>, result: LoginResult);
}

impl<F> LoginListener for F
where
    F: FnOnce(LoginResult) + Send + 'static,
{
    fn on_event(self: Box<Self>, result: LoginResult) {
        (*self)(result)
    }
}
