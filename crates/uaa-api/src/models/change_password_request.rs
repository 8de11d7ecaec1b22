use serde::{Deserialize, Serialize};

/// Body of `PUT /Users/{id}/password`.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    /// The current password. UAA requires it unless the caller is an administrator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_password: Option<String>,
    /// The new password.
    pub password: String,
}

impl ChangePasswordRequest {
    pub fn new(password: impl Into<String>) -> ChangePasswordRequest {
        ChangePasswordRequest {
            old_password: None,
            password: password.into(),
        }
    }

    pub fn with_old_password(mut self, old_password: impl Into<String>) -> ChangePasswordRequest {
        self.old_password = Some(old_password.into());
        self
    }
}
