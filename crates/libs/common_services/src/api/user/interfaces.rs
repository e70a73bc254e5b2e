use crate::api::follow::interfaces::FollowInfo;
use crate::database::app_user::{PublicUser, User};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Allow-listed profile update. Unknown fields in the payload (`role`,
/// `iat`, `exp`, anything else) are dropped by deserialization and can
/// never reach the database.
#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub nick: Option<String>,
    #[schema(value_type = Option<String>, format = "password")]
    pub password: Option<String>,
}

impl UpdateUser {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.nick.is_none()
            && self.password.is_none()
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ProfileResponse {
    pub status: String,
    pub user: PublicUser,
    pub follow_info: FollowInfo,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct UserListResponse {
    pub status: String,
    pub users: Vec<PublicUser>,
    pub total_docs: i64,
    pub total_pages: i64,
    pub current_page: i64,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct UpdateResponse {
    pub status: String,
    pub message: String,
    pub user: User,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct AvatarUploadResponse {
    pub status: String,
    pub user: User,
    pub file: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct AvatarResponse {
    pub status: String,
    pub image_url: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct CountersResponse {
    pub status: String,
    pub user_id: i32,
    pub name: String,
    pub last_name: String,
    pub following_count: i64,
    pub followed_count: i64,
    pub publications_count: i64,
}

#[cfg(test)]
mod tests {
    use super::UpdateUser;

    #[test]
    fn unknown_fields_are_dropped() {
        // Token-derived and privileged fields must not survive parsing.
        let payload: UpdateUser = serde_json::from_str(
            r#"{"nick": "NewNick", "role": "role_admin", "iat": 1, "exp": 2, "image": "x"}"#,
        )
        .unwrap();
        assert_eq!(payload.nick.as_deref(), Some("NewNick"));
        assert!(payload.password.is_none());
    }

    #[test]
    fn empty_payload_is_detected() {
        let payload: UpdateUser = serde_json::from_str("{}").unwrap();
        assert!(payload.is_empty());
    }
}
