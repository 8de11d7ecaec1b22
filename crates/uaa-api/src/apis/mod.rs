use std::sync::Arc;

use reqwest::{header, Method};
use serde::{de::DeserializeOwned, Serialize};
use uaa_api_base::{Configuration, Error};

pub mod groups_api;
pub mod health_api;
pub mod users_api;

/// Entry point to the bindings, either talking to a real server or backed by mockall mocks.
pub enum ApiClient {
    #[allow(missing_docs)]
    Real(ApiClientReal),
    #[allow(missing_docs)]
    Mock(ApiClientMock),
}

#[allow(missing_docs)]
pub struct ApiClientReal {
    users_api: users_api::UsersApiClient,
    groups_api: groups_api::GroupsApiClient,
    health_api: health_api::HealthApiClient,
}

#[allow(missing_docs)]
pub struct ApiClientMock {
    pub users_api: users_api::MockUsersApi,
    pub groups_api: groups_api::MockGroupsApi,
    pub health_api: health_api::MockHealthApi,
}

impl ApiClient {
    /// Creates bindings that send requests using `configuration`.
    pub fn new(configuration: &Arc<Configuration>) -> Self {
        Self::Real(ApiClientReal {
            users_api: users_api::UsersApiClient::new(configuration.clone()),
            groups_api: groups_api::GroupsApiClient::new(configuration.clone()),
            health_api: health_api::HealthApiClient::new(configuration.clone()),
        })
    }

    /// Creates mocked bindings. Expectations are configured in `func`.
    pub fn new_mocked(func: impl FnOnce(&mut ApiClientMock)) -> Self {
        let mut mock = ApiClientMock {
            users_api: users_api::MockUsersApi::new(),
            groups_api: groups_api::MockGroupsApi::new(),
            health_api: health_api::MockHealthApi::new(),
        };
        func(&mut mock);
        Self::Mock(mock)
    }

    #[allow(missing_docs)]
    pub fn users_api(&self) -> &dyn users_api::UsersApi {
        match self {
            ApiClient::Real(real) => &real.users_api,
            ApiClient::Mock(mock) => &mock.users_api,
        }
    }

    #[allow(missing_docs)]
    pub fn groups_api(&self) -> &dyn groups_api::GroupsApi {
        match self {
            ApiClient::Real(real) => &real.groups_api,
            ApiClient::Mock(mock) => &mock.groups_api,
        }
    }

    #[allow(missing_docs)]
    pub fn health_api(&self) -> &dyn health_api::HealthApi {
        match self {
            ApiClient::Real(real) => &real.health_api,
            ApiClient::Mock(mock) => &mock.health_api,
        }
    }
}

const JSON: &str = "application/json";

/// Sends a single request to `path` (relative to the configured base path).
///
/// `query` pairs are form-encoded one by one, so values may contain `&`, `#` or `%`. Values
/// placed in `path` must be escaped with [`uaa_api_base::urlencode`] by the caller.
///
/// Non-success statuses are turned into [`Error::Response`] carrying the response body.
pub(crate) async fn send(
    configuration: &Configuration,
    method: Method,
    path: &str,
    query: &[(&str, &str)],
    accept: &str,
    body: Option<&impl Serialize>,
) -> Result<reqwest::Response, Error> {
    tracing::debug!(method = method.as_str(), path, "Sending UAA request");

    let mut request = configuration
        .client
        .request(method, configuration.url(path))
        .header(header::ACCEPT, accept);

    if !query.is_empty() {
        request = request.query(query);
    }
    if let Some(ref user_agent) = configuration.user_agent {
        request = request.header(header::USER_AGENT, user_agent.clone());
    }
    if let Some(ref access_token) = configuration.oauth_access_token {
        request = request.bearer_auth(access_token.clone());
    }
    if let Some(body) = body {
        request = request
            .header(header::CONTENT_TYPE, JSON)
            .body(serde_json::to_string(body)?);
    }

    let response = request.send().await?;

    let status = response.status();
    if !status.is_success() {
        let content = response.text().await?;
        let error = Error::from_response(status, content);
        tracing::debug!(%status, path, code = error.error_code(), "UAA request failed");
        return Err(error);
    }

    Ok(response)
}

/// Deserializes a JSON response body.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, Error> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Deserializes a JSON response body that the server may leave empty or set to `null`.
pub(crate) async fn read_optional_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<Option<T>, Error> {
    let body = response.text().await?;
    if body.trim().is_empty() {
        return Ok(None);
    }
    Ok(serde_json::from_str::<Option<T>>(&body)?)
}

/// Placeholder body type for requests without one.
pub(crate) const NO_BODY: Option<&()> = None;

/// Placeholder for requests without query parameters.
pub(crate) const NO_QUERY: &[(&str, &str)] = &[];
