use crate::database::DbError;
use crate::database::tables::app_user::{PublicUser, User, UserName, UserWithPassword};
use sqlx::{Executor, Postgres};

const USER_COLUMNS: &str = "id, name, last_name, email, nick, image, role, created_at";
const PUBLIC_COLUMNS: &str = "id, name, last_name, nick, image, created_at";

pub struct UserStore;

impl UserStore {
    /// Creates a new user. Email and nick are expected to be case-folded
    /// already.
    pub async fn create(
        executor: impl Executor<'_, Database = Postgres>,
        name: &str,
        last_name: &str,
        email: &str,
        nick: &str,
        hashed_password: &str,
    ) -> Result<User, DbError> {
        let query = format!(
            "INSERT INTO app_user (name, last_name, email, nick, password)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {USER_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, User>(&query)
            .bind(name)
            .bind(last_name)
            .bind(email)
            .bind(nick)
            .bind(hashed_password)
            .fetch_one(executor)
            .await?)
    }

    pub async fn find_by_id(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i32,
    ) -> Result<Option<User>, DbError> {
        let query = format!("SELECT {USER_COLUMNS} FROM app_user WHERE id = $1");
        Ok(sqlx::query_as::<_, User>(&query)
            .bind(user_id)
            .fetch_optional(executor)
            .await?)
    }

    pub async fn find_by_email_with_password(
        executor: impl Executor<'_, Database = Postgres>,
        email: &str,
    ) -> Result<Option<UserWithPassword>, DbError> {
        let query = format!("SELECT {USER_COLUMNS}, password FROM app_user WHERE email = $1");
        Ok(sqlx::query_as::<_, UserWithPassword>(&query)
            .bind(email)
            .fetch_optional(executor)
            .await?)
    }

    /// Profile projection: password, role and email are never selected.
    pub async fn find_public_by_id(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i32,
    ) -> Result<Option<PublicUser>, DbError> {
        let query = format!("SELECT {PUBLIC_COLUMNS} FROM app_user WHERE id = $1");
        Ok(sqlx::query_as::<_, PublicUser>(&query)
            .bind(user_id)
            .fetch_optional(executor)
            .await?)
    }

    /// True when a user with the given case-folded email or nick exists.
    pub async fn exists_with_email_or_nick(
        executor: impl Executor<'_, Database = Postgres>,
        email: &str,
        nick: &str,
    ) -> Result<bool, DbError> {
        Ok(sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM app_user WHERE email = $1 OR nick = $2)",
        )
        .bind(email)
        .bind(nick)
        .fetch_one(executor)
        .await?)
    }

    /// Finds the id of a user other than `exclude_id` already holding one of
    /// the submitted email/nick values. Used for the update uniqueness check.
    pub async fn find_conflicting_id(
        executor: impl Executor<'_, Database = Postgres>,
        email: Option<&str>,
        nick: Option<&str>,
        exclude_id: i32,
    ) -> Result<Option<i32>, DbError> {
        Ok(sqlx::query_scalar::<_, i32>(
            "SELECT id FROM app_user
             WHERE (($1::text IS NOT NULL AND email = $1)
                 OR ($2::text IS NOT NULL AND nick = $2))
               AND id <> $3
             LIMIT 1",
        )
        .bind(email)
        .bind(nick)
        .bind(exclude_id)
        .fetch_optional(executor)
        .await?)
    }

    /// Applies a partial update; `None` fields are left untouched.
    /// Returns `None` when the target row no longer exists.
    pub async fn update(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i32,
        name: Option<&str>,
        last_name: Option<&str>,
        email: Option<&str>,
        nick: Option<&str>,
        hashed_password: Option<&str>,
    ) -> Result<Option<User>, DbError> {
        let query = format!(
            "UPDATE app_user
             SET name = COALESCE($1, name),
                 last_name = COALESCE($2, last_name),
                 email = COALESCE($3, email),
                 nick = COALESCE($4, nick),
                 password = COALESCE($5, password)
             WHERE id = $6
             RETURNING {USER_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, User>(&query)
            .bind(name)
            .bind(last_name)
            .bind(email)
            .bind(nick)
            .bind(hashed_password)
            .bind(user_id)
            .fetch_optional(executor)
            .await?)
    }

    /// Stores the avatar URL for a user, returning the updated record.
    pub async fn set_image(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i32,
        image: &str,
    ) -> Result<Option<User>, DbError> {
        let query =
            format!("UPDATE app_user SET image = $1 WHERE id = $2 RETURNING {USER_COLUMNS}");
        Ok(sqlx::query_as::<_, User>(&query)
            .bind(image)
            .bind(user_id)
            .fetch_optional(executor)
            .await?)
    }

    /// Fetches only the image column. Outer `None` means no such user.
    pub async fn find_image(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i32,
    ) -> Result<Option<Option<String>>, DbError> {
        Ok(
            sqlx::query_scalar::<_, Option<String>>("SELECT image FROM app_user WHERE id = $1")
                .bind(user_id)
                .fetch_optional(executor)
                .await?,
        )
    }

    pub async fn find_name(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i32,
    ) -> Result<Option<UserName>, DbError> {
        Ok(
            sqlx::query_as::<_, UserName>("SELECT name, last_name FROM app_user WHERE id = $1")
                .bind(user_id)
                .fetch_optional(executor)
                .await?,
        )
    }

    pub async fn count(executor: impl Executor<'_, Database = Postgres>) -> Result<i64, DbError> {
        Ok(sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM app_user")
            .fetch_one(executor)
            .await?)
    }

    /// One page of users, oldest first, in the public projection.
    pub async fn page(
        executor: impl Executor<'_, Database = Postgres>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PublicUser>, DbError> {
        let query = format!(
            "SELECT {PUBLIC_COLUMNS} FROM app_user
             ORDER BY id
             LIMIT $1 OFFSET $2"
        );
        Ok(sqlx::query_as::<_, PublicUser>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(executor)
            .await?)
    }

    pub async fn exists(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i32,
    ) -> Result<bool, DbError> {
        Ok(
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM app_user WHERE id = $1)")
                .bind(user_id)
                .fetch_one(executor)
                .await?,
        )
    }
}
