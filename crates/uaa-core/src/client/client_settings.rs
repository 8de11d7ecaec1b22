use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Settings used to build a [`UaaClient`](crate::UaaClient). They are uneditable once the
/// client is created.
///
/// Defaults to
///
/// ```
/// # use uaa_core::ClientSettings;
/// let settings = ClientSettings {
///     uaa_url: "http://localhost:8080/uaa".to_string(),
///     user_agent: "UAA Rust Client".to_string(),
///     headers: Vec::new(),
///     access_token: None,
/// };
/// let default = ClientSettings::default();
/// ```
#[derive(Serialize, Deserialize, Clone, JsonSchema)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ClientSettings {
    /// Base url of the UAA instance. Defaults to `http://localhost:8080/uaa`
    pub uaa_url: String,
    /// The user_agent sent to UAA. Defaults to `UAA Rust Client`
    pub user_agent: String,
    /// Headers forced onto every request, applied in order.
    pub headers: Vec<HeaderSetting>,
    /// Bearer token sent with every request. Obtaining it is up to the caller.
    pub access_token: Option<String>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            uaa_url: "http://localhost:8080/uaa".into(),
            user_agent: "UAA Rust Client".into(),
            headers: Vec::new(),
            access_token: None,
        }
    }
}

impl fmt::Debug for ClientSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSettings")
            .field("uaa_url", &self.uaa_url)
            .field("user_agent", &self.user_agent)
            .field("headers", &self.headers)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// A fixed header injected into every request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct HeaderSetting {
    #[allow(missing_docs)]
    pub key: String,
    #[allow(missing_docs)]
    pub value: String,
}

impl HeaderSetting {
    #[allow(missing_docs)]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
