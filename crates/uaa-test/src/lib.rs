//! Test helpers shared by the uaa crates.

mod api;

pub use api::{scim_error, start_api_mock, TEST_ACCESS_TOKEN};
