use crate::database::app_user::PublicUser;
use crate::database::follow::Follow;
use serde::Serialize;
use utoipa::ToSchema;

/// Relation between a viewer and a profile: does the viewer follow the
/// target, and does the target follow the viewer.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub struct FollowInfo {
    pub following: bool,
    pub followed: bool,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct FollowResponse {
    pub status: String,
    pub follow: Follow,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct UnfollowResponse {
    pub status: String,
    pub message: String,
}

/// Paginated list of users on either side of the follow relation.
#[derive(Serialize, Debug, ToSchema)]
pub struct FollowListResponse {
    pub status: String,
    pub users: Vec<PublicUser>,
    pub total_docs: i64,
    pub total_pages: i64,
    pub current_page: i64,
}
