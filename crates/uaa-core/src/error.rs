//! Errors that can occur when using this client

use thiserror::Error;

use crate::http::HeaderInjectionError;

/// Errors returned by [`UaaClient`](crate::UaaClient) operations.
#[derive(Debug, Error)]
pub enum UaaError {
    /// The request failed in transport or the server answered with a non-success status.
    #[error(transparent)]
    Api(#[from] uaa_api_base::Error),
    /// A configured header could not be turned into a valid HTTP header.
    #[error(transparent)]
    InvalidHeader(#[from] HeaderInjectionError),
    /// A record passed to an operation was missing a field the request needs.
    #[error("The record is missing a required field: {0}")]
    MissingField(&'static str),
}

impl UaaError {
    /// The HTTP status returned by the server, if the failure was a non-success response.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            UaaError::Api(e) => e.status(),
            _ => None,
        }
    }

    /// The UAA error code from the response body, e.g. `scim_resource_not_found`.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            UaaError::Api(e) => e.error_code(),
            _ => None,
        }
    }
}
