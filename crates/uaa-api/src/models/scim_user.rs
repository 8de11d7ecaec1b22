use serde::{Deserialize, Serialize};

use crate::models::ScimMeta;

/// A SCIM user resource as exposed by `/Users`.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScimUser {
    /// Server-assigned identifier. Absent on creation payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_name: String,
    /// Only sent when creating a user; UAA never returns it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<ScimName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<ScimEmail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ScimMeta>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schemas: Vec<String>,
}

impl ScimUser {
    /// The canonical creation payload for a user logging in with `username`.
    ///
    /// The username doubles as the primary email address.
    pub fn new_user(username: impl Into<String>, password: impl Into<String>) -> ScimUser {
        let username = username.into();
        ScimUser {
            emails: vec![ScimEmail {
                value: username.clone(),
                primary: true,
            }],
            user_name: username,
            password: Some(password.into()),
            ..Default::default()
        }
    }
}

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScimName {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
}

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScimEmail {
    pub value: String,
    #[serde(default)]
    pub primary: bool,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn new_user_serializes_to_creation_payload() {
        let user = ScimUser::new_user("alice@example.com", "p@ss1");

        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            json!({
                "userName": "alice@example.com",
                "password": "p@ss1",
                "emails": [{ "value": "alice@example.com", "primary": true }]
            })
        );
    }

    #[test]
    fn deserializes_uaa_user_ignoring_unknown_fields() {
        let user: ScimUser = serde_json::from_value(json!({
            "id": "7d3f2c9e",
            "externalId": "",
            "meta": {
                "version": 0,
                "created": "2015-09-01T10:00:00.000Z",
                "lastModified": "2015-09-01T10:00:00.000Z"
            },
            "userName": "alice",
            "name": { "givenName": "Alice" },
            "emails": [{ "value": "alice@example.com", "primary": false }],
            "groups": [{ "value": "g-1", "display": "openid", "type": "DIRECT" }],
            "active": true,
            "verified": true,
            "origin": "uaa",
            "zoneId": "uaa",
            "schemas": ["urn:scim:schemas:core:1.0"]
        }))
        .unwrap();

        assert_eq!(user.id.as_deref(), Some("7d3f2c9e"));
        assert_eq!(user.user_name, "alice");
        assert_eq!(user.password, None);
        assert_eq!(user.meta.and_then(|m| m.version), Some(0));
        assert_eq!(user.zone_id.as_deref(), Some("uaa"));
        assert!(!user.emails[0].primary);
    }
}
