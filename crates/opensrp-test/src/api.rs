use opensrp_core::ApiConfiguration;

/// Helper for testing the HTTP collaborators using wiremock.
///
/// Warning: when using `Mock::expect` ensure `server` is not dropped before the test completes.
pub async fn start_api_mock(
    mocks: Vec<wiremock::Mock>,
) -> (wiremock::MockServer, ApiConfiguration) {
    let server = wiremock::MockServer::start().await;

    for mock in mocks {
        server.register(mock).await;
    }

    let config = ApiConfiguration {
        base_path: server.uri(),
        client: reqwest::Client::new(),
    };

    (server, config)
}
