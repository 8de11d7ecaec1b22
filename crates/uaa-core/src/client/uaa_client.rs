use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::instrument;
use uaa_api::{
    apis::ApiClient,
    models::{
        ChangePasswordRequest, ScimGroup, ScimGroupMember, ScimUser, SearchResults,
        UserIdNamePair,
    },
};
use uaa_api_base::Configuration;

use crate::{
    client::{
        filter::{user_ids_filter, user_name_filter},
        ClientSettings,
    },
    http::{with_header_injectors, HeaderInjectionMiddleware},
    UaaError,
};

/// Operations offered by a UAA instance. Each one is a single request to the server.
#[automock]
#[async_trait]
pub trait UaaOperations: Send + Sync {
    /// Creates a user whose username doubles as its primary email.
    async fn create_user(&self, username: &str, password: &str) -> Result<ScimUser, UaaError>;

    /// Adds the user to `group`.
    async fn add_user_to_group(
        &self,
        group: &ScimGroup,
        user_id: &str,
    ) -> Result<ScimGroupMember, UaaError>;

    /// Removes the user from `group`. Fails if the user is not a member.
    async fn remove_user_from_group(&self, group: &ScimGroup, user_id: &str)
        -> Result<(), UaaError>;

    /// Lists users.
    async fn get_users(&self) -> Result<SearchResults<ScimUser>, UaaError>;

    /// Deletes a user.
    async fn delete_user(&self, user_id: &str) -> Result<(), UaaError>;

    /// Resolves user names for `user_ids`. Ids are placed in the filter verbatim.
    async fn find_user_names(&self, user_ids: &[String])
        -> Result<Vec<UserIdNamePair>, UaaError>;

    /// Finds a group by display name, `None` if no group matches.
    async fn get_group(&self, group_name: &str) -> Result<Option<ScimGroup>, UaaError>;

    /// Sets a new password for the user.
    async fn change_password(
        &self,
        user_id: &str,
        request: ChangePasswordRequest,
    ) -> Result<(), UaaError>;

    /// Finds the first user with `user_name`, `None` if there is none.
    async fn find_user_id_by_name(
        &self,
        user_name: &str,
    ) -> Result<Option<UserIdNamePair>, UaaError>;

    /// Raw health status text of the server.
    async fn get_uaa_health(&self) -> Result<String, UaaError>;
}

/// [`UaaOperations`] implementation talking to a UAA instance over HTTP.
pub struct UaaClient {
    api_client: ApiClient,
}

impl UaaClient {
    /// Creates a client from `settings`, registering a header injector per configured header.
    pub fn new(settings: ClientSettings) -> Result<Self, UaaError> {
        let injectors = settings
            .headers
            .iter()
            .map(|header| HeaderInjectionMiddleware::new(&header.key, &header.value))
            .collect::<Result<Vec<_>, _>>()?;

        let http_client = reqwest::Client::builder()
            .build()
            .map_err(uaa_api_base::Error::from)?;
        let http_client = with_header_injectors(
            reqwest_middleware::ClientBuilder::new(http_client),
            injectors,
        )
        .build();

        let mut configuration = Configuration::with_client(settings.uaa_url, http_client);
        configuration.user_agent = Some(settings.user_agent);
        configuration.oauth_access_token = settings.access_token;

        Ok(Self::from_configuration(configuration))
    }

    /// Creates a client sending requests through a caller-assembled configuration.
    pub fn from_configuration(configuration: Configuration) -> Self {
        Self::from_api_client(ApiClient::new(&Arc::new(configuration)))
    }

    /// Creates a client on top of existing bindings, real or mocked.
    pub fn from_api_client(api_client: ApiClient) -> Self {
        Self { api_client }
    }
}

fn group_id(group: &ScimGroup) -> Result<&str, UaaError> {
    group.id.as_deref().ok_or(UaaError::MissingField("group.id"))
}

#[async_trait]
impl UaaOperations for UaaClient {
    #[instrument(err, skip_all, fields(username = %username))]
    async fn create_user(&self, username: &str, password: &str) -> Result<ScimUser, UaaError> {
        let user = ScimUser::new_user(username, password);
        Ok(self.api_client.users_api().create_user(user).await?)
    }

    #[instrument(err, skip_all, fields(group = %group.display_name, user_id = %user_id))]
    async fn add_user_to_group(
        &self,
        group: &ScimGroup,
        user_id: &str,
    ) -> Result<ScimGroupMember, UaaError> {
        let group_id = group_id(group)?;
        Ok(self
            .api_client
            .groups_api()
            .add_member(group_id, ScimGroupMember::new(user_id))
            .await?)
    }

    #[instrument(err, skip_all, fields(group = %group.display_name, user_id = %user_id))]
    async fn remove_user_from_group(
        &self,
        group: &ScimGroup,
        user_id: &str,
    ) -> Result<(), UaaError> {
        let group_id = group_id(group)?;
        self.api_client
            .groups_api()
            .remove_member(group_id, user_id)
            .await?;
        Ok(())
    }

    async fn get_users(&self) -> Result<SearchResults<ScimUser>, UaaError> {
        Ok(self.api_client.users_api().get_users().await?)
    }

    #[instrument(err, skip_all, fields(user_id = %user_id))]
    async fn delete_user(&self, user_id: &str) -> Result<(), UaaError> {
        self.api_client.users_api().delete_user(user_id).await?;
        Ok(())
    }

    async fn find_user_names(
        &self,
        user_ids: &[String],
    ) -> Result<Vec<UserIdNamePair>, UaaError> {
        let filter = user_ids_filter(user_ids);
        let list = self
            .api_client
            .users_api()
            .search_user_names(&filter)
            .await?;

        Ok(list.map(|list| list.resources).unwrap_or_default())
    }

    async fn get_group(&self, group_name: &str) -> Result<Option<ScimGroup>, UaaError> {
        Ok(self
            .api_client
            .groups_api()
            .find_group_by_display_name(group_name)
            .await?)
    }

    #[instrument(err, skip_all, fields(user_id = %user_id))]
    async fn change_password(
        &self,
        user_id: &str,
        request: ChangePasswordRequest,
    ) -> Result<(), UaaError> {
        self.api_client
            .users_api()
            .change_password(user_id, request)
            .await?;
        Ok(())
    }

    async fn find_user_id_by_name(
        &self,
        user_name: &str,
    ) -> Result<Option<UserIdNamePair>, UaaError> {
        let list = self
            .api_client
            .users_api()
            .search_user_names(&user_name_filter(user_name))
            .await?;

        Ok(list.and_then(|list| list.resources.into_iter().next()))
    }

    async fn get_uaa_health(&self) -> Result<String, UaaError> {
        Ok(self.api_client.health_api().get_health().await?)
    }
}

#[cfg(test)]
mod tests {
    use uaa_api::models::UserIdNameList;

    use super::*;

    fn pair(id: &str, user_name: &str) -> UserIdNamePair {
        UserIdNamePair {
            id: id.to_string(),
            user_name: user_name.to_string(),
        }
    }

    #[tokio::test]
    async fn create_user_sends_canonical_payload() {
        let client = UaaClient::from_api_client(ApiClient::new_mocked(|mock| {
            mock.users_api
                .expect_create_user()
                .withf(|user| *user == ScimUser::new_user("alice", "p@ss1"))
                .times(1)
                .returning(|user| {
                    Ok(ScimUser {
                        id: Some("u-1".to_string()),
                        password: None,
                        ..user
                    })
                });
        }));

        let user = client.create_user("alice", "p@ss1").await.unwrap();

        assert_eq!(user.id.as_deref(), Some("u-1"));
        assert_eq!(user.user_name, "alice");
    }

    #[tokio::test]
    async fn find_user_names_or_joins_id_clauses() {
        let client = UaaClient::from_api_client(ApiClient::new_mocked(|mock| {
            mock.users_api
                .expect_search_user_names()
                .withf(|filter| filter == "Id eq \"u-1\" or Id eq \"u-2\"")
                .times(1)
                .returning(|_| {
                    Ok(Some(UserIdNameList {
                        resources: vec![pair("u-1", "alice"), pair("u-2", "bob")],
                    }))
                });
        }));

        let names = client
            .find_user_names(&["u-1".to_string(), "u-2".to_string()])
            .await
            .unwrap();

        assert_eq!(names, vec![pair("u-1", "alice"), pair("u-2", "bob")]);
    }

    #[tokio::test]
    async fn find_user_names_without_ids_sends_empty_filter() {
        let client = UaaClient::from_api_client(ApiClient::new_mocked(|mock| {
            mock.users_api
                .expect_search_user_names()
                .withf(|filter| filter.is_empty())
                .times(1)
                .returning(|_| Ok(None));
        }));

        assert!(client.find_user_names(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_user_id_by_name_returns_first_match() {
        let client = UaaClient::from_api_client(ApiClient::new_mocked(|mock| {
            mock.users_api
                .expect_search_user_names()
                .withf(|filter| filter == "userName eq 'alice'")
                .returning(|_| {
                    Ok(Some(UserIdNameList {
                        resources: vec![pair("u-1", "alice"), pair("u-9", "alice")],
                    }))
                });
        }));

        let found = client.find_user_id_by_name("alice").await.unwrap();

        assert_eq!(found, Some(pair("u-1", "alice")));
    }

    #[tokio::test]
    async fn find_user_id_by_name_absent_on_empty_result() {
        let client = UaaClient::from_api_client(ApiClient::new_mocked(|mock| {
            let mut responses = vec![Ok(None), Ok(Some(UserIdNameList::default()))];
            mock.users_api
                .expect_search_user_names()
                .times(2)
                .returning(move |_| responses.remove(0));
        }));

        assert_eq!(client.find_user_id_by_name("ghost").await.unwrap(), None);
        assert_eq!(client.find_user_id_by_name("ghost").await.unwrap(), None);
    }

    #[tokio::test]
    async fn group_operations_use_the_group_id() {
        let client = UaaClient::from_api_client(ApiClient::new_mocked(|mock| {
            mock.groups_api
                .expect_add_member()
                .withf(|group_id, member| {
                    group_id == "g-1" && *member == ScimGroupMember::new("u-1")
                })
                .times(1)
                .returning(|_, member| Ok(member));
            mock.groups_api
                .expect_remove_member()
                .withf(|group_id, member_id| group_id == "g-1" && member_id == "u-1")
                .times(1)
                .returning(|_, _| Ok(()));
        }));
        let group = ScimGroup::new("g-1", "admins");

        let member = client.add_user_to_group(&group, "u-1").await.unwrap();
        client.remove_user_from_group(&group, "u-1").await.unwrap();

        assert_eq!(member.value, "u-1");
    }

    #[tokio::test]
    async fn group_without_id_is_rejected_before_any_request() {
        let client = UaaClient::from_api_client(ApiClient::new_mocked(|mock| {
            mock.groups_api.expect_add_member().never();
        }));
        let group = ScimGroup {
            display_name: "admins".to_string(),
            ..Default::default()
        };

        let err = client.add_user_to_group(&group, "u-1").await.unwrap_err();

        assert!(matches!(err, UaaError::MissingField("group.id")));
    }

    #[tokio::test]
    async fn api_errors_propagate() {
        let client = UaaClient::from_api_client(ApiClient::new_mocked(|mock| {
            mock.groups_api
                .expect_find_group_by_display_name()
                .returning(|_| {
                    Err(uaa_api_base::Error::from_response(
                        reqwest::StatusCode::FORBIDDEN,
                        r#"{"error":"insufficient_scope","error_description":"scim.read"}"#
                            .to_string(),
                    ))
                });
        }));

        let err = client.get_group("admins").await.unwrap_err();

        assert_eq!(err.status(), Some(reqwest::StatusCode::FORBIDDEN));
        assert_eq!(err.error_code(), Some("insufficient_scope"));
    }

    #[test]
    fn invalid_header_settings_are_rejected() {
        let settings = ClientSettings {
            headers: vec![crate::HeaderSetting::new("bad header", "v")],
            ..Default::default()
        };

        assert!(matches!(
            UaaClient::new(settings),
            Err(UaaError::InvalidHeader(_))
        ));
    }
}
