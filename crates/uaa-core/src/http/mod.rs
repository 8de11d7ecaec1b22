//! HTTP pipeline customization.

/// Middleware forcing a fixed header onto every request.
mod header_injection;
/// Assembly of the middleware pipeline.
mod pipeline;

pub use header_injection::{HeaderInjectionError, HeaderInjectionMiddleware};
pub use pipeline::with_header_injectors;
