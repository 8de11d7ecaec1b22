use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use reqwest::Method;
use uaa_api_base::{urlencode, Configuration, Error};

use crate::{
    apis::{read_json, read_optional_json, send, JSON, NO_BODY, NO_QUERY},
    models::{ScimGroup, ScimGroupMember, SearchResults},
};

/// Bindings for the `/Groups` endpoints.
#[automock]
#[async_trait]
pub trait GroupsApi: Send + Sync {
    /// POST /Groups/{group_id}/members
    async fn add_member(
        &self,
        group_id: &str,
        member: ScimGroupMember,
    ) -> Result<ScimGroupMember, Error>;

    /// DELETE /Groups/{group_id}/members/{member_id}
    async fn remove_member(&self, group_id: &str, member_id: &str) -> Result<(), Error>;

    /// GET /Groups?filter=displayName eq '{display_name}'&startIndex=1
    ///
    /// Returns `None` when the server sends no body, `null`, or an empty page.
    async fn find_group_by_display_name(
        &self,
        display_name: &str,
    ) -> Result<Option<ScimGroup>, Error>;
}

#[allow(missing_docs)]
pub struct GroupsApiClient {
    configuration: Arc<Configuration>,
}

impl GroupsApiClient {
    #[allow(missing_docs)]
    pub fn new(configuration: Arc<Configuration>) -> Self {
        Self { configuration }
    }
}

#[async_trait]
impl GroupsApi for GroupsApiClient {
    async fn add_member(
        &self,
        group_id: &str,
        member: ScimGroupMember,
    ) -> Result<ScimGroupMember, Error> {
        let path = format!("/Groups/{}/members", urlencode(group_id));
        let response = send(
            &self.configuration,
            Method::POST,
            &path,
            NO_QUERY,
            JSON,
            Some(&member),
        )
        .await?;
        read_json(response).await
    }

    async fn remove_member(&self, group_id: &str, member_id: &str) -> Result<(), Error> {
        let path = format!(
            "/Groups/{}/members/{}",
            urlencode(group_id),
            urlencode(member_id)
        );
        send(&self.configuration, Method::DELETE, &path, NO_QUERY, JSON, NO_BODY).await?;
        Ok(())
    }

    async fn find_group_by_display_name(
        &self,
        display_name: &str,
    ) -> Result<Option<ScimGroup>, Error> {
        let filter = format!("displayName eq '{display_name}'");
        let query = [("filter", filter.as_str()), ("startIndex", "1")];
        let response = send(
            &self.configuration,
            Method::GET,
            "/Groups",
            &query,
            JSON,
            NO_BODY,
        )
        .await?;

        let Some(body) = read_optional_json::<serde_json::Value>(response).await? else {
            return Ok(None);
        };
        group_from_lookup(body)
    }
}

/// Filter queries answer with a search page, but a bare group is accepted too.
fn group_from_lookup(body: serde_json::Value) -> Result<Option<ScimGroup>, Error> {
    if body.get("resources").is_some() {
        let page: SearchResults<ScimGroup> = serde_json::from_value(body)?;
        return Ok(page.into_first());
    }
    Ok(Some(serde_json::from_value(body)?))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use uaa_test::start_api_mock;
    use wiremock::{
        matchers::{body_json, method, path, query_param},
        Mock, ResponseTemplate,
    };

    use super::*;

    #[tokio::test]
    async fn test_add_member() {
        let (_server, configuration) = start_api_mock(vec![Mock::given(method("POST"))
            .and(path("/Groups/g-1/members"))
            .and(body_json(json!({ "value": "u-1", "type": "USER", "origin": "uaa" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "value": "u-1",
                "type": "USER",
                "origin": "uaa"
            })))
            .expect(1)])
        .await;

        let api = GroupsApiClient::new(Arc::new(configuration));
        let member = api
            .add_member("g-1", ScimGroupMember::new("u-1"))
            .await
            .unwrap();

        assert_eq!(member, ScimGroupMember::new("u-1"));
    }

    #[tokio::test]
    async fn test_remove_member() {
        let (_server, configuration) = start_api_mock(vec![Mock::given(method("DELETE"))
            .and(path("/Groups/g-1/members/u-1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)])
        .await;

        let api = GroupsApiClient::new(Arc::new(configuration));

        assert!(api.remove_member("g-1", "u-1").await.is_ok());
    }

    #[tokio::test]
    async fn test_find_group_from_search_page() {
        let (_server, configuration) = start_api_mock(vec![Mock::given(method("GET"))
            .and(path("/Groups"))
            .and(query_param("filter", "displayName eq 'admins'"))
            .and(query_param("startIndex", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "resources": [{ "id": "g-1", "displayName": "admins" }],
                "startIndex": 1,
                "itemsPerPage": 100,
                "totalResults": 1
            })))
            .expect(1)])
        .await;

        let api = GroupsApiClient::new(Arc::new(configuration));
        let group = api.find_group_by_display_name("admins").await.unwrap();

        assert_eq!(group, Some(ScimGroup::new("g-1", "admins")));
    }

    #[tokio::test]
    async fn test_find_group_null_body() {
        let (_server, configuration) = start_api_mock(vec![Mock::given(method("GET"))
            .and(path("/Groups"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("null", "application/json"))
            .expect(1)])
        .await;

        let api = GroupsApiClient::new(Arc::new(configuration));

        assert_eq!(api.find_group_by_display_name("nobody").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_find_group_with_reserved_characters_in_name() {
        for name in ["R&D", "team#1", "100% ops"] {
            let filter = format!("displayName eq '{name}'");
            let (server, configuration) = start_api_mock(vec![Mock::given(method("GET"))
                .and(path("/Groups"))
                .and(query_param("filter", filter.as_str()))
                .and(query_param("startIndex", "1"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "resources": [{ "id": "g-9", "displayName": name }]
                })))
                .expect(1)])
            .await;

            let api = GroupsApiClient::new(Arc::new(configuration));
            let group = api.find_group_by_display_name(name).await.unwrap();

            assert_eq!(group, Some(ScimGroup::new("g-9", name)));
            let requests = server.received_requests().await.unwrap();
            assert_eq!(requests[0].url.query_pairs().count(), 2, "{name}");
        }
    }

    #[tokio::test]
    async fn test_remove_member_escapes_ids() {
        let (_server, configuration) = start_api_mock(vec![Mock::given(method("DELETE"))
            .and(path("/Groups/g%231/members/u%2F1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)])
        .await;

        let api = GroupsApiClient::new(Arc::new(configuration));

        assert!(api.remove_member("g#1", "u/1").await.is_ok());
    }

    #[test]
    fn bare_group_body_is_accepted() {
        let group = group_from_lookup(json!({ "id": "g-2", "displayName": "auditors" })).unwrap();
        assert_eq!(group, Some(ScimGroup::new("g-2", "auditors")));
    }

    #[test]
    fn empty_search_page_is_not_found() {
        let group = group_from_lookup(json!({ "resources": [], "totalResults": 0 })).unwrap();
        assert_eq!(group, None);
    }
}
