use serde::{Deserialize, Serialize};

use crate::models::{ScimGroupMember, ScimMeta};

/// A SCIM group resource as exposed by `/Groups`.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScimGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<ScimGroupMember>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ScimMeta>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schemas: Vec<String>,
}

impl ScimGroup {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> ScimGroup {
        ScimGroup {
            id: Some(id.into()),
            display_name: display_name.into(),
            ..Default::default()
        }
    }
}
