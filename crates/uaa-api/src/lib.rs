//! Bindings for the SCIM endpoints of a UAA instance.
//!
//! Every method on the [`apis`] traits maps to exactly one HTTP request. Higher level behavior
//! (filter construction, "not found" handling) lives in `uaa-core`.

pub mod apis;
#[allow(missing_docs)]
pub mod models;

pub use uaa_api_base::{Configuration, Error};
