use crate::api::follow::error::FollowError;
use crate::api::follow::interfaces::FollowInfo;
use crate::api::pagination::Page;
use crate::database::app_user::PublicUser;
use crate::database::follow::Follow;
use crate::database::{DbError, FollowStore, UserStore};
use sqlx::PgPool;
use tracing::info;

/// Creates the edge caller → target.
///
/// # Errors
///
/// * `FollowError::SelfFollow` when caller and target are the same user.
/// * `FollowError::UserNotFound` when the target does not exist.
/// * `FollowError::AlreadyFollowing` when the edge already exists.
pub async fn follow_user(
    pool: &PgPool,
    caller_id: i32,
    target_id: i32,
) -> Result<Follow, FollowError> {
    if caller_id == target_id {
        return Err(FollowError::SelfFollow);
    }
    if !UserStore::exists(pool, target_id).await? {
        return Err(FollowError::UserNotFound);
    }

    match FollowStore::create(pool, caller_id, target_id).await {
        Ok(follow) => {
            info!("User {caller_id} now follows {target_id}");
            Ok(follow)
        }
        Err(e) if e.is_unique_violation() => Err(FollowError::AlreadyFollowing),
        Err(e) => Err(FollowError::Db(e)),
    }
}

/// Removes the edge caller → target.
///
/// # Errors
///
/// * `FollowError::NotFollowing` when no such edge exists.
pub async fn unfollow_user(
    pool: &PgPool,
    caller_id: i32,
    target_id: i32,
) -> Result<(), FollowError> {
    let removed = FollowStore::delete(pool, caller_id, target_id).await?;
    if removed == 0 {
        return Err(FollowError::NotFollowing);
    }
    info!("User {caller_id} unfollowed {target_id}");
    Ok(())
}

/// Both directions of the relation between viewer and target.
pub async fn follow_relation(
    pool: &PgPool,
    viewer_id: i32,
    target_id: i32,
) -> Result<FollowInfo, DbError> {
    let following = FollowStore::edge_exists(pool, viewer_id, target_id).await?;
    let followed = FollowStore::edge_exists(pool, target_id, viewer_id).await?;
    Ok(FollowInfo {
        following,
        followed,
    })
}

/// Page of users that `user_id` follows, with totals.
pub async fn following_list(
    pool: &PgPool,
    user_id: i32,
    page: Page,
) -> Result<(Vec<PublicUser>, i64, i64), FollowError> {
    if !UserStore::exists(pool, user_id).await? {
        return Err(FollowError::UserNotFound);
    }
    let total_docs = FollowStore::count_following(pool, user_id).await?;
    let users = FollowStore::following_page(pool, user_id, page.limit, page.offset()).await?;
    Ok((users, total_docs, page.total_pages(total_docs)))
}

/// Page of users following `user_id`, with totals.
pub async fn followers_list(
    pool: &PgPool,
    user_id: i32,
    page: Page,
) -> Result<(Vec<PublicUser>, i64, i64), FollowError> {
    if !UserStore::exists(pool, user_id).await? {
        return Err(FollowError::UserNotFound);
    }
    let total_docs = FollowStore::count_followers(pool, user_id).await?;
    let users = FollowStore::followers_page(pool, user_id, page.limit, page.offset()).await?;
    Ok((users, total_docs, page.total_pages(total_docs)))
}
