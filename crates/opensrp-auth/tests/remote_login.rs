//! End-to-end login flows against a mocked OpenSRP server
use std::{
    cell::RefCell,
    rc::Rc,
    sync::{Arc, Mutex},
};

use opensrp_auth::{
    Credentials, DeviceState, HttpAuthService, LoginListener, LoginOrchestrator, LoginOutcome,
    LoginPresenter, LoginResult, LoginTaskState, ProgressMessage,
};
use opensrp_core::ApiConfiguration;
use opensrp_settings::{HttpSettingsServiceFactory, SITE_CHARACTERISTICS};
use opensrp_test::start_api_mock;
use serde_json::json;
use wiremock::{matchers, Mock, ResponseTemplate};

struct FirstLogin(bool);

impl DeviceState for FirstLogin {
    fn has_stored_password(&self) -> bool {
        !self.0
    }
}

#[derive(Default)]
struct UiPresenter {
    busy: RefCell<Vec<bool>>,
    messages: RefCell<Vec<String>>,
}

impl LoginPresenter for UiPresenter {
    fn show_progress(&self, show: bool) {
        self.busy.borrow_mut().push(show);
    }

    fn update_progress_message(&self, message: ProgressMessage) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

fn orchestrator(config: ApiConfiguration, first_login: bool) -> LoginOrchestrator {
    LoginOrchestrator::new(
        Arc::new(HttpAuthService::new(config.clone())),
        Arc::new(FirstLogin(first_login)),
        Arc::new(HttpSettingsServiceFactory::new(config)),
    )
}

fn capture() -> (Arc<Mutex<Option<LoginResult>>>, impl LoginListener) {
    let slot = Arc::new(Mutex::new(None));
    let listener = {
        let slot = slot.clone();
        move |result: LoginResult| {
            *slot.lock().unwrap() = Some(result);
        }
    };
    (slot, listener)
}

fn user_details() -> serde_json::Value {
    json!({
        "user": { "username": "alice" },
        "team": { "team": { "uuid": "team-1" } }
    })
}

#[tokio::test]
async fn first_login_pulls_site_characteristics() {
    let local_set = tokio::task::LocalSet::new();
    local_set
        .run_until(async {
            let (_server, config) = start_api_mock(vec![
                Mock::given(matchers::method("GET"))
                    .and(matchers::path("/security/authenticate"))
                    .respond_with(ResponseTemplate::new(200).set_body_json(user_details())),
                Mock::given(matchers::method("GET"))
                    .and(matchers::path("/rest/settings/sync"))
                    .and(matchers::query_param("teamId", "team-1"))
                    .respond_with(
                        ResponseTemplate::new(200).set_body_json(json!({ "facility": "A" })),
                    )
                    .expect(1),
            ])
            .await;

            let presenter = Rc::new(UiPresenter::default());
            let (slot, listener) = capture();

            let task = orchestrator(config, true).start(
                Credentials::new("alice", "pw1"),
                presenter.clone(),
                listener,
            );

            assert_eq!(task.finished().await, LoginTaskState::Completed);

            let result = slot.lock().unwrap().take().expect("listener was called");
            assert_eq!(result.outcome(), LoginOutcome::Success);
            assert_eq!(
                result.settings().map(|s| s.to_json()),
                Some(json!({ "site_characteristics": { "facility": "A" } }))
            );
            assert_eq!(
                result.settings().and_then(|s| s.get(SITE_CHARACTERISTICS)),
                Some(json!({ "facility": "A" }))
            );
            assert_eq!(*presenter.busy.borrow(), vec![true, false]);
            assert_eq!(
                *presenter.messages.borrow(),
                vec!["Loading client settings...".to_string()]
            );
        })
        .await;
}

#[tokio::test]
async fn broken_settings_do_not_block_login() {
    let local_set = tokio::task::LocalSet::new();
    local_set
        .run_until(async {
            let (_server, config) = start_api_mock(vec![
                Mock::given(matchers::method("GET"))
                    .and(matchers::path("/security/authenticate"))
                    .respond_with(ResponseTemplate::new(200).set_body_json(user_details())),
                Mock::given(matchers::method("GET"))
                    .and(matchers::path("/rest/settings/sync"))
                    .respond_with(ResponseTemplate::new(200).set_body_string("not json")),
            ])
            .await;

            let presenter = Rc::new(UiPresenter::default());
            let (slot, listener) = capture();

            let task = orchestrator(config, true).start(
                Credentials::new("alice", "pw1"),
                presenter.clone(),
                listener,
            );

            assert_eq!(task.finished().await, LoginTaskState::Completed);

            let result = slot.lock().unwrap().take().expect("listener was called");
            assert_eq!(result.outcome(), LoginOutcome::Success);
            assert!(result.settings().is_none());
            assert_eq!(*presenter.busy.borrow(), vec![true, false]);
        })
        .await;
}

#[tokio::test]
async fn wrong_password_never_reaches_settings_endpoint() {
    let local_set = tokio::task::LocalSet::new();
    local_set
        .run_until(async {
            let (_server, config) = start_api_mock(vec![
                Mock::given(matchers::method("GET"))
                    .and(matchers::path("/security/authenticate"))
                    .respond_with(ResponseTemplate::new(401)),
                Mock::given(matchers::method("GET"))
                    .and(matchers::path("/rest/settings/sync"))
                    .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
                    .expect(0),
            ])
            .await;

            let presenter = Rc::new(UiPresenter::default());
            let (slot, listener) = capture();

            let task = orchestrator(config, true).start(
                Credentials::new("alice", "wrong"),
                presenter.clone(),
                listener,
            );

            assert_eq!(task.finished().await, LoginTaskState::Completed);

            let result = slot.lock().unwrap().take().expect("listener was called");
            assert_eq!(result.outcome(), LoginOutcome::InvalidCredentials);
            assert!(result.settings().is_none());
            assert!(presenter.messages.borrow().is_empty());
        })
        .await;
}
