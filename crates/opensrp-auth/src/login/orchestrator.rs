use std::{rc::Rc, sync::Arc};

use opensrp_settings::{SettingsEnvelope, SettingsPullRequest, SettingsServiceFactory};
use opensrp_threading::{CancellationToken, ThreadBoundRunner};
use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, error, info_span, warn, Instrument};

use super::{
    AuthService, DeviceState, LoginListener, LoginPresenter, LoginResponse, LoginResult,
    ProgressMessage,
};
use crate::Credentials;

/// Where a login attempt currently is.
///
/// `Completed` and `Cancelled` are terminal: once reached, the state never changes again.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginTaskState {
    Created,
    Validating,
    PullingSettings,
    Completed,
    Cancelled,
}

impl LoginTaskState {
    #[allow(missing_docs)]
    pub fn is_terminal(self) -> bool {
        matches!(self, LoginTaskState::Completed | LoginTaskState::Cancelled)
    }
}

/// Drives remote logins.
///
/// Each call to [`start`](LoginOrchestrator::start) runs one login attempt:
///
/// 1. The presenter enters its busy state, synchronously.
/// 2. The credentials are validated by the [`AuthService`] on a background task.
/// 3. If the login succeeded and the device has no stored password yet, the presenter is told
///    that client settings are loading and the team's settings are pulled. A failed pull is
///    logged and otherwise ignored.
/// 4. The presenter leaves its busy state and the [`LoginListener`] receives the
///    [`LoginResult`], unless the attempt was cancelled.
///
/// Presenter calls and the listener run on the thread that called `start`, which must be
/// inside a `tokio::task::LocalSet`.
pub struct LoginOrchestrator {
    auth_service: Arc<dyn AuthService>,
    device_state: Arc<dyn DeviceState>,
    settings_services: Arc<dyn SettingsServiceFactory>,
}

impl LoginOrchestrator {
    #[allow(missing_docs)]
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        device_state: Arc<dyn DeviceState>,
        settings_services: Arc<dyn SettingsServiceFactory>,
    ) -> Self {
        Self {
            auth_service,
            device_state,
            settings_services,
        }
    }

    /// Starts one login attempt and returns a handle to it.
    ///
    /// # Panics
    ///
    /// Panics when called outside a `tokio::task::LocalSet`. The presenter is not touched in that
    /// case.
    pub fn start<P: LoginPresenter>(
        &self,
        credentials: Credentials,
        presenter: Rc<P>,
        listener: impl LoginListener,
    ) -> LoginTask {
        let (state_tx, state_rx) = watch::channel(LoginTaskState::Created);
        let cancellation_token = CancellationToken::new();
        let span = info_span!("remote_login", username = %credentials.username());

        // Must precede `show_progress(true)`: binding panics outside a `LocalSet`.
        let runner = ThreadBoundRunner::new(presenter.clone());
        presenter.show_progress(true);

        let remote_login = RemoteLogin {
            auth_service: self.auth_service.clone(),
            device_state: self.device_state.clone(),
            settings_services: self.settings_services.clone(),
            credentials,
            presenter: runner,
            cancellation_token: cancellation_token.clone(),
            state: state_tx,
        };
        let handle = tokio::spawn(remote_login.run(Box::new(listener)).instrument(span));

        LoginTask {
            cancellation_token,
            state: state_rx,
            handle,
        }
    }
}

/// Handle to a running login attempt.
pub struct LoginTask {
    cancellation_token: CancellationToken,
    state: watch::Receiver<LoginTaskState>,
    handle: JoinHandle<LoginTaskState>,
}

impl LoginTask {
    /// Requests cancellation.
    ///
    /// A network call already in flight is allowed to finish but its result is discarded: the
    /// presenter leaves its busy state and the listener is never called. Has no effect once the
    /// result has been delivered.
    pub fn cancel(&self) {
        self.cancellation_token.cancel();
    }

    #[allow(missing_docs)]
    pub fn is_cancelled(&self) -> bool {
        self.cancellation_token.is_cancelled()
    }

    #[allow(missing_docs)]
    pub fn state(&self) -> LoginTaskState {
        *self.state.borrow()
    }

    /// Waits until the attempt has reached a terminal state and its final presenter calls have
    /// been made. The caller's `LocalSet` must keep running meanwhile.
    pub async fn finished(self) -> LoginTaskState {
        match self.handle.await {
            Ok(state) => state,
            Err(e) => {
                error!("Login task did not run to completion: {e}");
                LoginTaskState::Cancelled
            }
        }
    }
}

/// One login attempt, owned by its background task.
struct RemoteLogin<P> {
    auth_service: Arc<dyn AuthService>,
    device_state: Arc<dyn DeviceState>,
    settings_services: Arc<dyn SettingsServiceFactory>,
    credentials: Credentials,
    presenter: ThreadBoundRunner<P>,
    cancellation_token: CancellationToken,
    state: watch::Sender<LoginTaskState>,
}

impl<P: LoginPresenter> RemoteLogin<P> {
    async fn run(self, listener: Box<dyn LoginListener>) -> LoginTaskState {
        let result = self.login().await;
        self.finish(result, listener).await
    }

    /// Returns `None` when the attempt was cancelled.
    async fn login(&self) -> Option<LoginResult> {
        if self.cancellation_token.is_cancelled() {
            return None;
        }

        self.transition(LoginTaskState::Validating);
        let response = self.auth_service.validate_remote(&self.credentials).await;
        debug!(outcome = ?response.outcome(), "Remote login validated");

        if self.cancellation_token.is_cancelled() {
            return None;
        }

        if !response.outcome().is_success() || self.device_state.has_stored_password() {
            return Some(LoginResult::new(response));
        }

        self.transition(LoginTaskState::PullingSettings);
        let result = self.pull_settings(response).await;

        if self.cancellation_token.is_cancelled() {
            return None;
        }
        Some(result)
    }

    async fn pull_settings(&self, response: LoginResponse) -> LoginResult {
        let lookup = response.clone();
        let team_id = match self
            .presenter
            .run_in_thread(move |presenter| async move {
                presenter.update_progress_message(ProgressMessage::LoadingClientSettings);
                presenter.user_team_id(&lookup)
            })
            .await
        {
            Ok(team_id) => team_id,
            Err(e) => {
                warn!("Skipping settings pull, presenter unavailable: {e}");
                return LoginResult::new(response);
            }
        };

        if team_id.is_none() {
            warn!("No team id for this login, pulling settings without a team filter");
        }

        let service = self.settings_services.create(SettingsPullRequest {
            username: self.credentials.username().to_string(),
            password: self.credentials.password().to_string(),
            team_id,
        });

        match service.pull_settings_from_server().await {
            Ok(document) => LoginResult::with_settings(
                response,
                SettingsEnvelope::site_characteristics(document),
            ),
            Err(e) => {
                error!("Failed to pull client settings: {e}");
                LoginResult::new(response)
            }
        }
    }

    async fn finish(
        self,
        result: Option<LoginResult>,
        listener: Box<dyn LoginListener>,
    ) -> LoginTaskState {
        let cancellation_token = self.cancellation_token.clone();
        let delivered = self
            .presenter
            .run_in_thread(move |presenter| async move {
                presenter.show_progress(false);
                match result {
                    // A cancel that lands before delivery still wins.
                    Some(result) if !cancellation_token.is_cancelled() => {
                        listener.on_event(result);
                        LoginTaskState::Completed
                    }
                    _ => LoginTaskState::Cancelled,
                }
            })
            .await;

        let state = delivered.unwrap_or_else(|e| {
            error!("Could not deliver the login result: {e}");
            LoginTaskState::Cancelled
        });
        self.transition(state);
        debug!(?state, "Remote login finished");
        state
    }

    fn transition(&self, next: LoginTaskState) {
        self.state.send_if_modified(|state| {
            if state.is_terminal() || *state == next {
                return false;
            }
            debug!(from = ?state, to = ?next, "Login state changed");
            *state = next;
            true
        });
    }
}
