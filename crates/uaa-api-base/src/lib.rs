//! Base types shared by the UAA API bindings.
//!
//! This crate provides the functionality every binding needs:
//! - The [`Configuration`] pointing a binding at a UAA instance
//! - The transport [`Error`] type, with the UAA error body parsed when the server sends one
//! - [`urlencode`] for values placed in request paths

mod configuration;
mod error;
mod util;

pub use configuration::Configuration;
pub use error::{Error, UaaErrorBody};
pub use util::urlencode;
