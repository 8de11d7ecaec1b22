use reqwest::header::{HeaderName, HeaderValue};

/// Errors raised when a header injector is built from an invalid key or value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeaderInjectionError {
    /// The key is not a valid HTTP header name.
    #[error("Invalid header name: {0:?}")]
    InvalidName(String),
    /// The value contains characters not allowed in an HTTP header.
    #[error("Invalid value for header {0}")]
    InvalidValue(String),
}

/// Middleware that sets a fixed header on every outgoing request.
///
/// Any value already present for the header is replaced. The request is then forwarded to the
/// next stage of the pipeline and that stage's response, or error, is returned untouched.
///
/// Two injectors are equal when they set the same header (names compare case-insensitively) to
/// the same value, which lets a pipeline skip duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HeaderInjectionMiddleware {
    key: HeaderName,
    value: HeaderValue,
}

impl HeaderInjectionMiddleware {
    /// Creates an injector setting `key` to `value`.
    pub fn new(key: &str, value: &str) -> Result<Self, HeaderInjectionError> {
        let key = HeaderName::from_bytes(key.as_bytes())
            .map_err(|_| HeaderInjectionError::InvalidName(key.to_owned()))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| HeaderInjectionError::InvalidValue(key.to_string()))?;

        Ok(Self { key, value })
    }

    /// The header this injector sets.
    pub fn key(&self) -> &HeaderName {
        &self.key
    }

    /// The value the header is set to.
    pub fn value(&self) -> &HeaderValue {
        &self.value
    }
}

#[async_trait::async_trait]
impl reqwest_middleware::Middleware for HeaderInjectionMiddleware {
    async fn handle(
        &self,
        mut req: reqwest::Request,
        extensions: &mut http::Extensions,
        next: reqwest_middleware::Next<'_>,
    ) -> Result<reqwest::Response, reqwest_middleware::Error> {
        // Header values may carry credentials, only the name is logged.
        tracing::trace!(header = %self.key, "Injecting request header");
        req.headers_mut().insert(self.key.clone(), self.value.clone());

        next.run(req, extensions).await
    }
}
