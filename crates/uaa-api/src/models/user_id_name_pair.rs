use serde::{Deserialize, Serialize};

/// The `id,userName` projection returned when `/Users` is queried with `attributes=id,userName`.
#[derive(Clone, Default, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdNamePair {
    pub id: String,
    pub user_name: String,
}

/// Search response holding [`UserIdNamePair`] projections.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserIdNameList {
    #[serde(default)]
    pub resources: Vec<UserIdNamePair>,
}
