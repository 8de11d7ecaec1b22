//! Configuration types for API clients.

/// Configuration for an API client.
///
/// Holds the base URL of the UAA instance and the HTTP client every request is sent through.
/// Any middleware registered on `client` (header injection, tracing, ...) applies to all
/// requests made with this configuration.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Base URL of the UAA instance (e.g., "<https://uaa.example.com>"), without a trailing slash.
    pub base_path: String,
    /// HTTP client with middleware support.
    pub client: reqwest_middleware::ClientWithMiddleware,
    /// OAuth access token sent as a bearer token, if any.
    pub oauth_access_token: Option<String>,
    /// User-Agent header value to be sent with requests.
    pub user_agent: Option<String>,
}

impl Configuration {
    /// Creates a configuration for `base_path` using a plain reqwest client without middleware.
    pub fn new(base_path: impl Into<String>) -> Self {
        Self::with_client(base_path, reqwest::Client::new().into())
    }

    /// Creates a configuration for `base_path` sending requests through `client`.
    pub fn with_client(
        base_path: impl Into<String>,
        client: reqwest_middleware::ClientWithMiddleware,
    ) -> Self {
        Self {
            base_path: trim_base_path(base_path.into()),
            client,
            oauth_access_token: None,
            user_agent: None,
        }
    }

    /// Joins `path` onto the base path. `path` is expected to start with a `/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_path, path)
    }
}

fn trim_base_path(mut base_path: String) -> String {
    while base_path.ends_with('/') {
        base_path.pop();
    }
    base_path
}
