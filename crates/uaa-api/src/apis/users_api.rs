use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use reqwest::Method;
use uaa_api_base::{urlencode, Configuration, Error};

use crate::{
    apis::{read_json, read_optional_json, send, JSON, NO_BODY, NO_QUERY},
    models::{ChangePasswordRequest, ScimUser, SearchResults, UserIdNameList},
};

/// Bindings for the `/Users` endpoints.
#[automock]
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// POST /Users
    async fn create_user(&self, user: ScimUser) -> Result<ScimUser, Error>;

    /// GET /Users
    async fn get_users(&self) -> Result<SearchResults<ScimUser>, Error>;

    /// DELETE /Users/{id}
    async fn delete_user(&self, id: &str) -> Result<(), Error>;

    /// PUT /Users/{id}/password
    async fn change_password(&self, id: &str, request: ChangePasswordRequest)
        -> Result<(), Error>;

    /// GET /Users?attributes=id,userName&filter={filter}
    ///
    /// The SCIM expression in `filter` is not rewritten, only encoded as a query value. Returns
    /// `None` when the server sends no body.
    async fn search_user_names(&self, filter: &str) -> Result<Option<UserIdNameList>, Error>;
}

#[allow(missing_docs)]
pub struct UsersApiClient {
    configuration: Arc<Configuration>,
}

impl UsersApiClient {
    #[allow(missing_docs)]
    pub fn new(configuration: Arc<Configuration>) -> Self {
        Self { configuration }
    }
}

#[async_trait]
impl UsersApi for UsersApiClient {
    async fn create_user(&self, user: ScimUser) -> Result<ScimUser, Error> {
        let response = send(
            &self.configuration,
            Method::POST,
            "/Users",
            NO_QUERY,
            JSON,
            Some(&user),
        )
        .await?;
        read_json(response).await
    }

    async fn get_users(&self) -> Result<SearchResults<ScimUser>, Error> {
        let response = send(
            &self.configuration,
            Method::GET,
            "/Users",
            NO_QUERY,
            JSON,
            NO_BODY,
        )
        .await?;
        read_json(response).await
    }

    async fn delete_user(&self, id: &str) -> Result<(), Error> {
        let path = format!("/Users/{}", urlencode(id));
        send(&self.configuration, Method::DELETE, &path, NO_QUERY, JSON, NO_BODY).await?;
        Ok(())
    }

    async fn change_password(
        &self,
        id: &str,
        request: ChangePasswordRequest,
    ) -> Result<(), Error> {
        let path = format!("/Users/{}/password", urlencode(id));
        send(
            &self.configuration,
            Method::PUT,
            &path,
            NO_QUERY,
            JSON,
            Some(&request),
        )
        .await?;
        Ok(())
    }

    async fn search_user_names(&self, filter: &str) -> Result<Option<UserIdNameList>, Error> {
        let query = [("attributes", "id,userName"), ("filter", filter)];
        let response = send(
            &self.configuration,
            Method::GET,
            "/Users",
            &query,
            JSON,
            NO_BODY,
        )
        .await?;
        read_optional_json(response).await
    }
}
