use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use reqwest::Method;
use uaa_api_base::{Configuration, Error};

use crate::apis::{send, NO_BODY, NO_QUERY};

/// Bindings for the `/healthz` endpoint.
#[automock]
#[async_trait]
pub trait HealthApi: Send + Sync {
    /// GET /healthz
    ///
    /// Returns the raw status text, `ok` on a healthy server.
    async fn get_health(&self) -> Result<String, Error>;
}

#[allow(missing_docs)]
pub struct HealthApiClient {
    configuration: Arc<Configuration>,
}

impl HealthApiClient {
    #[allow(missing_docs)]
    pub fn new(configuration: Arc<Configuration>) -> Self {
        Self { configuration }
    }
}

#[async_trait]
impl HealthApi for HealthApiClient {
    async fn get_health(&self) -> Result<String, Error> {
        let response = send(
            &self.configuration,
            Method::GET,
            "/healthz",
            NO_QUERY,
            "text/plain, */*",
            NO_BODY,
        )
        .await?;

        Ok(response.text().await?)
    }
}
