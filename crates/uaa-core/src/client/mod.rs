//! UAA client

mod client_settings;
mod filter;
mod uaa_client;

pub use client_settings::{ClientSettings, HeaderSetting};
pub use filter::{user_ids_filter, user_name_filter};
pub use uaa_client::{MockUaaOperations, UaaClient, UaaOperations};
