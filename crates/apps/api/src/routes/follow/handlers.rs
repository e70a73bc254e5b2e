//! HTTP handlers for follow/unfollow and the follower listings.

use crate::api_state::ApiContext;
use crate::auth::middlewares::user::ApiUser;
use axum::Json;
use axum::extract::{Path, Query, State};
use common_services::api::follow::error::FollowError;
use common_services::api::follow::interfaces::{
    FollowListResponse, FollowResponse, UnfollowResponse,
};
use common_services::api::follow::service::{
    follow_user, followers_list, following_list, unfollow_user,
};
use common_services::api::pagination::{Page, PageQuery};
use tracing::instrument;

/// Follows the user in the path.
#[utoipa::path(
    post,
    path = "/api/follow/{id}",
    tag = "Follow",
    params(("id" = i32, Path, description = "User to follow")),
    responses(
        (status = 200, description = "Follow edge created", body = FollowResponse),
        (status = 400, description = "Cannot follow yourself"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Already following this user"),
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(context, caller), err(Debug))]
pub async fn follow(
    State(context): State<ApiContext>,
    ApiUser(caller): ApiUser,
    Path(target_id): Path<i32>,
) -> Result<Json<FollowResponse>, FollowError> {
    let follow = follow_user(&context.pool, caller.id, target_id).await?;
    Ok(Json(FollowResponse {
        status: "success".to_string(),
        follow,
    }))
}

/// Removes the follow edge towards the user in the path.
#[utoipa::path(
    delete,
    path = "/api/follow/{id}",
    tag = "Follow",
    params(("id" = i32, Path, description = "User to unfollow")),
    responses(
        (status = 200, description = "Follow edge removed", body = UnfollowResponse),
        (status = 404, description = "Follow relation not found"),
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(context, caller), err(Debug))]
pub async fn unfollow(
    State(context): State<ApiContext>,
    ApiUser(caller): ApiUser,
    Path(target_id): Path<i32>,
) -> Result<Json<UnfollowResponse>, FollowError> {
    unfollow_user(&context.pool, caller.id, target_id).await?;
    Ok(Json(UnfollowResponse {
        status: "success".to_string(),
        message: "User unfollowed".to_string(),
    }))
}

/// Users that the given user follows.
#[utoipa::path(
    get,
    path = "/api/follow/following/{id}/{page}",
    tag = "Follow",
    params(
        ("id" = i32, Path, description = "User id"),
        ("page" = i64, Path, description = "Page number, starting at 1"),
        PageQuery,
    ),
    responses(
        (status = 200, description = "Paginated followed users", body = FollowListResponse),
        (status = 404, description = "User not found"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn following(
    State(context): State<ApiContext>,
    Path((user_id, page)): Path<(i32, i64)>,
    Query(query): Query<PageQuery>,
) -> Result<Json<FollowListResponse>, FollowError> {
    let page = Page::new(Some(page), query.limit);
    let (users, total_docs, total_pages) = following_list(&context.pool, user_id, page).await?;
    Ok(Json(FollowListResponse {
        status: "success".to_string(),
        users,
        total_docs,
        total_pages,
        current_page: page.number,
    }))
}

/// Users following the given user.
#[utoipa::path(
    get,
    path = "/api/follow/followers/{id}/{page}",
    tag = "Follow",
    params(
        ("id" = i32, Path, description = "User id"),
        ("page" = i64, Path, description = "Page number, starting at 1"),
        PageQuery,
    ),
    responses(
        (status = 200, description = "Paginated followers", body = FollowListResponse),
        (status = 404, description = "User not found"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn followers(
    State(context): State<ApiContext>,
    Path((user_id, page)): Path<(i32, i64)>,
    Query(query): Query<PageQuery>,
) -> Result<Json<FollowListResponse>, FollowError> {
    let page = Page::new(Some(page), query.limit);
    let (users, total_docs, total_pages) = followers_list(&context.pool, user_id, page).await?;
    Ok(Json(FollowListResponse {
        status: "success".to_string(),
        users,
        total_docs,
        total_pages,
        current_page: page.number,
    }))
}
