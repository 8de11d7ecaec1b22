pub mod change_password_request;
pub use self::change_password_request::ChangePasswordRequest;
pub mod scim_group;
pub use self::scim_group::ScimGroup;
pub mod scim_group_member;
pub use self::scim_group_member::{MemberType, ScimGroupMember};
pub mod scim_meta;
pub use self::scim_meta::ScimMeta;
pub mod scim_user;
pub use self::scim_user::{ScimEmail, ScimName, ScimUser};
pub mod search_results;
pub use self::search_results::SearchResults;
pub mod user_id_name_pair;
pub use self::user_id_name_pair::{UserIdNameList, UserIdNamePair};
