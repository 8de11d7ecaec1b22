//! Error types for API operations.

use serde::Deserialize;

/// Error document UAA sends along with a failed request.
///
/// SCIM endpoints answer with `{"error": "scim_resource_not_found", "message": "..."}`, the
/// OAuth endpoints with `{"error": "invalid_token", "error_description": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UaaErrorBody {
    /// Machine readable error code, e.g. `scim_resource_not_found`.
    pub error: Option<String>,
    /// Human readable message of the SCIM endpoints.
    pub message: Option<String>,
    /// Human readable message of the OAuth endpoints.
    pub error_description: Option<String>,
}

impl UaaErrorBody {
    /// Parses `content` as a UAA error document. Bodies that are not JSON, or JSON without any
    /// of the error fields, yield `None`.
    pub fn parse(content: &str) -> Option<Self> {
        serde_json::from_str::<Self>(content)
            .ok()
            .filter(|body| body.error.is_some() || body.description().is_some())
    }

    /// The human readable message, whichever field the server used for it.
    pub fn description(&self) -> Option<&str> {
        self.message
            .as_deref()
            .or(self.error_description.as_deref())
    }
}

/// An error returned by the API client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Server returned a non-success HTTP response.
    #[error("UAA error {status}: {}", summary(.body.as_ref(), .content))]
    Response {
        /// HTTP status code of the response.
        status: reqwest::StatusCode,
        /// Raw response body content.
        content: String,
        /// `content` parsed as a UAA error document, if it is one.
        body: Option<UaaErrorBody>,
    },

    /// The UAA server could not be reached or did not answer in time.
    #[error("not connected: {0}")]
    NotConnected(String),

    /// Request could not be built, or a response body could not be decoded.
    #[error("other error: {0}")]
    Other(String),
}

fn summary(body: Option<&UaaErrorBody>, content: &str) -> String {
    let Some(body) = body else {
        return content.to_owned();
    };
    match (body.error.as_deref(), body.description()) {
        (Some(code), Some(description)) => format!("{code} ({description})"),
        (Some(code), None) => code.to_owned(),
        (None, Some(description)) => description.to_owned(),
        (None, None) => content.to_owned(),
    }
}

impl Error {
    /// Builds an [`Error::Response`] from a failed response, parsing the UAA error document in
    /// `content` when there is one.
    pub fn from_response(status: reqwest::StatusCode, content: String) -> Self {
        let body = UaaErrorBody::parse(&content);
        Error::Response {
            status,
            content,
            body,
        }
    }

    /// The HTTP status of a [`Error::Response`], `None` for every other variant.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Error::Response { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The UAA error code of a [`Error::Response`], e.g. `scim_resource_not_found`.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Error::Response {
                body: Some(body), ..
            } => body.error.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            // Only produced by `error_for_status`, which drops the body.
            Some(status) => Error::from_response(status, String::new()),
            None if e.is_connect() || e.is_timeout() || e.is_request() => {
                Error::NotConnected(e.to_string())
            }
            None => Error::Other(e.to_string()),
        }
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => e.into(),
            reqwest_middleware::Error::Middleware(e) => Error::Other(format!("{e:#}")),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Other(format!("invalid JSON: {e}"))
    }
}
