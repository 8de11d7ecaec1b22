//! Client for the UAA (User Account and Authentication) identity management API.
//!
//! [`UaaClient`] maps each [`UaaOperations`] method onto a single request against the SCIM
//! endpoints of a UAA instance. Requests go through a `reqwest_middleware` pipeline which can
//! carry [`HeaderInjectionMiddleware`](crate::http::HeaderInjectionMiddleware)s forcing fixed
//! headers onto every request.

pub mod client;
mod error;
pub mod http;

pub use client::{ClientSettings, HeaderSetting, UaaClient, UaaOperations};
pub use error::UaaError;
pub use uaa_api::models;
