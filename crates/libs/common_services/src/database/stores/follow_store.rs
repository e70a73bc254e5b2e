use crate::database::DbError;
use crate::database::tables::app_user::PublicUser;
use crate::database::tables::follow::Follow;
use sqlx::{Executor, Postgres};

const FOLLOW_COLUMNS: &str = "id, following_user, followed_user, created_at";

pub struct FollowStore;

impl FollowStore {
    /// Inserts a follow edge. A duplicate pair surfaces as a
    /// unique-violation `DbError`.
    pub async fn create(
        executor: impl Executor<'_, Database = Postgres>,
        following_user: i32,
        followed_user: i32,
    ) -> Result<Follow, DbError> {
        let query = format!(
            "INSERT INTO follow (following_user, followed_user)
             VALUES ($1, $2)
             RETURNING {FOLLOW_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Follow>(&query)
            .bind(following_user)
            .bind(followed_user)
            .fetch_one(executor)
            .await?)
    }

    /// Deletes the edge, returning the number of rows removed.
    pub async fn delete(
        executor: impl Executor<'_, Database = Postgres>,
        following_user: i32,
        followed_user: i32,
    ) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM follow WHERE following_user = $1 AND followed_user = $2")
            .bind(following_user)
            .bind(followed_user)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    /// Does `follower` follow `followed`?
    pub async fn edge_exists(
        executor: impl Executor<'_, Database = Postgres>,
        follower: i32,
        followed: i32,
    ) -> Result<bool, DbError> {
        Ok(sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM follow WHERE following_user = $1 AND followed_user = $2)",
        )
        .bind(follower)
        .bind(followed)
        .fetch_one(executor)
        .await?)
    }

    /// Number of users this user follows.
    pub async fn count_following(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i32,
    ) -> Result<i64, DbError> {
        Ok(
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM follow WHERE following_user = $1")
                .bind(user_id)
                .fetch_one(executor)
                .await?,
        )
    }

    /// Number of users following this user.
    pub async fn count_followers(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i32,
    ) -> Result<i64, DbError> {
        Ok(
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM follow WHERE followed_user = $1")
                .bind(user_id)
                .fetch_one(executor)
                .await?,
        )
    }

    /// One page of the users that `user_id` follows.
    pub async fn following_page(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i32,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PublicUser>, DbError> {
        Ok(sqlx::query_as::<_, PublicUser>(
            "SELECT u.id, u.name, u.last_name, u.nick, u.image, u.created_at
             FROM follow f
             JOIN app_user u ON u.id = f.followed_user
             WHERE f.following_user = $1
             ORDER BY f.id
             LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(executor)
        .await?)
    }

    /// One page of the users that follow `user_id`.
    pub async fn followers_page(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i32,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PublicUser>, DbError> {
        Ok(sqlx::query_as::<_, PublicUser>(
            "SELECT u.id, u.name, u.last_name, u.nick, u.image, u.created_at
             FROM follow f
             JOIN app_user u ON u.id = f.following_user
             WHERE f.followed_user = $1
             ORDER BY f.id
             LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(executor)
        .await?)
    }
}
