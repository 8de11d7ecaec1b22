use serde_json::json;
use uaa_api_base::Configuration;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Bearer token sent by the [`Configuration`] returned from [`start_api_mock`].
pub const TEST_ACCESS_TOKEN: &str = "test-access-token";

/// Starts a wiremock server standing in for a UAA instance and registers `mocks` on it.
///
/// The returned [`Configuration`] targets the server and authenticates with
/// [`TEST_ACCESS_TOKEN`], like a client holding an admin token would.
///
/// Warning: expectations set with `Mock::expect` are only verified when the server is dropped,
/// keep it alive until the test completes.
pub async fn start_api_mock(mocks: Vec<Mock>) -> (MockServer, Configuration) {
    let server = MockServer::start().await;
    for mock in mocks {
        server.register(mock).await;
    }

    let mut configuration = Configuration::new(server.uri());
    configuration.oauth_access_token = Some(TEST_ACCESS_TOKEN.to_string());
    configuration.user_agent = Some("uaa-test".to_string());

    (server, configuration)
}

/// A failed UAA response in the shape the SCIM endpoints produce.
pub fn scim_error(status: u16, error: &str, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({
        "error": error,
        "message": message,
    }))
}
