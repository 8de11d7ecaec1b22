use serde::{Deserialize, Serialize};

/// Membership of a user (or nested group) in a group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScimGroupMember {
    /// Identifier of the member.
    pub value: String,
    #[serde(rename = "type", default)]
    pub member_type: MemberType,
    #[serde(default = "default_origin")]
    pub origin: String,
}

impl ScimGroupMember {
    /// A user membership for `member_id` originating from the internal UAA store.
    pub fn new(member_id: impl Into<String>) -> ScimGroupMember {
        ScimGroupMember {
            value: member_id.into(),
            member_type: MemberType::User,
            origin: default_origin(),
        }
    }
}

fn default_origin() -> String {
    "uaa".to_owned()
}

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MemberType {
    #[default]
    User,
    Group,
}
