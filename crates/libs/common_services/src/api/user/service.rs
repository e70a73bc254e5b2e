use crate::api::auth::hashing::hash_password;
use crate::api::auth::service::case_fold;
use crate::api::follow::interfaces::FollowInfo;
use crate::api::follow::service::follow_relation;
use crate::api::pagination::Page;
use crate::api::user::error::UserError;
use crate::api::user::interfaces::UpdateUser;
use crate::database::app_user::{PublicUser, User, UserName};
use crate::database::{DbError, FollowStore, PublicationStore, UserStore, nice_id};
use app_state::AppSettings;
use sqlx::PgPool;
use tracing::{info, warn};

/// Fetches the public profile of `target_id` together with the follow
/// relation between viewer and target.
pub async fn get_profile(
    pool: &PgPool,
    viewer_id: i32,
    target_id: i32,
) -> Result<(PublicUser, FollowInfo), UserError> {
    let user = UserStore::find_public_by_id(pool, target_id)
        .await?
        .ok_or(UserError::NotFound)?;
    let follow_info = follow_relation(pool, viewer_id, target_id).await?;
    Ok((user, follow_info))
}

/// One page of users plus totals. An empty page is reported as not-found.
pub async fn list_users(
    pool: &PgPool,
    page: Page,
) -> Result<(Vec<PublicUser>, i64, i64), UserError> {
    let total_docs = UserStore::count(pool).await?;
    let users = UserStore::page(pool, page.limit, page.offset()).await?;
    if users.is_empty() {
        return Err(UserError::NoUsers);
    }
    Ok((users, total_docs, page.total_pages(total_docs)))
}

/// A concurrent update can slip past the conflict pre-check; the unique
/// constraint then fires on write and must report the same conflict.
fn map_update_error(e: DbError) -> UserError {
    if e.is_unique_violation() {
        UserError::DuplicateData
    } else {
        UserError::Db(e)
    }
}

/// Applies an allow-listed partial update to the caller's own record.
///
/// Email/nick are case-folded and re-checked for uniqueness against other
/// users; a supplied password is re-hashed, an omitted one left untouched.
pub async fn update_user(
    pool: &PgPool,
    settings: &AppSettings,
    caller_id: i32,
    payload: UpdateUser,
) -> Result<User, UserError> {
    if payload.is_empty() {
        return Err(UserError::EmptyUpdate);
    }

    let email = payload.email.as_deref().map(case_fold);
    let nick = payload.nick.as_deref().map(case_fold);

    if email.is_some() || nick.is_some() {
        let conflict =
            UserStore::find_conflicting_id(pool, email.as_deref(), nick.as_deref(), caller_id)
                .await?;
        if conflict.is_some() {
            return Err(UserError::DuplicateData);
        }
    }

    let hashed = match payload.password.as_deref() {
        Some(password) if !password.is_empty() => {
            Some(hash_password(password, settings.auth.bcrypt_cost).map_err(UserError::Internal)?)
        }
        _ => None,
    };

    let user = UserStore::update(
        pool,
        caller_id,
        payload.name.as_deref(),
        payload.last_name.as_deref(),
        email.as_deref(),
        nick.as_deref(),
        hashed.as_deref(),
    )
    .await
    .map_err(map_update_error)?
    .ok_or(UserError::NotFound)?;

    Ok(user)
}

const ALLOWED_AVATAR_TYPES: &[(&str, &str)] = &[
    ("image/png", "png"),
    ("image/jpeg", "jpg"),
    ("image/webp", "webp"),
    ("image/gif", "gif"),
];

/// Maps an upload content type to the stored file extension.
///
/// # Errors
///
/// * `UserError::UnsupportedFileType` for anything that is not an image we serve.
pub fn avatar_extension(content_type: &str) -> Result<&'static str, UserError> {
    ALLOWED_AVATAR_TYPES
        .iter()
        .find(|(mime, _)| *mime == content_type)
        .map(|(_, ext)| *ext)
        .ok_or(UserError::UnsupportedFileType)
}

/// Strips the public avatar prefix, returning the on-disk file name.
/// Anything else (e.g. an external URL in an old record) yields `None`.
fn stored_avatar_file(public_path: &str) -> Option<&str> {
    public_path.strip_prefix("/uploads/avatars/")
}

/// Best-effort removal of a file in the uploads folder; a missing file is
/// not an error.
async fn remove_avatar_file(settings: &AppSettings, file_name: &str) {
    let path = settings.uploads.avatar_folder.join(file_name);
    if let Err(e) = tokio::fs::remove_file(&path).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            warn!("Could not remove avatar file {path:?}: {e}");
        }
    }
}

/// Writes the uploaded avatar to the uploads folder and stores its public
/// path in the user's image field. The replaced avatar file is removed on
/// success; the fresh file is removed again when the record update fails.
pub async fn store_avatar(
    pool: &PgPool,
    settings: &AppSettings,
    caller_id: i32,
    content_type: &str,
    bytes: &[u8],
) -> Result<(User, String), UserError> {
    let extension = avatar_extension(content_type)?;
    let previous = UserStore::find_image(pool, caller_id).await?.flatten();

    let file_name = format!(
        "{}.{extension}",
        nice_id(settings.uploads.avatar_id_length)
    );
    let disk_path = settings.uploads.avatar_folder.join(&file_name);

    tokio::fs::write(&disk_path, bytes).await.map_err(|e| {
        tracing::error!("Failed to write avatar {disk_path:?}: {e}");
        UserError::UploadFailed
    })?;

    let public_path = format!("/uploads/avatars/{file_name}");
    let user = match UserStore::set_image(pool, caller_id, &public_path).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            remove_avatar_file(settings, &file_name).await;
            return Err(UserError::UploadFailed);
        }
        Err(e) => {
            remove_avatar_file(settings, &file_name).await;
            return Err(e.into());
        }
    };

    if let Some(old_file) = previous.as_deref().and_then(stored_avatar_file) {
        remove_avatar_file(settings, old_file).await;
    }

    info!("Stored avatar for user {caller_id} at {public_path}");
    Ok((user, public_path))
}

/// Returns the stored avatar URL for a user; missing user or missing image
/// are both not-found.
pub async fn get_avatar(pool: &PgPool, user_id: i32) -> Result<String, UserError> {
    UserStore::find_image(pool, user_id)
        .await?
        .flatten()
        .ok_or(UserError::NotFound)
}

/// Follower/followed/publication counts plus the user's name fields.
pub async fn get_counters(
    pool: &PgPool,
    user_id: i32,
) -> Result<(UserName, i64, i64, i64), UserError> {
    let name = UserStore::find_name(pool, user_id)
        .await?
        .ok_or(UserError::NotFound)?;

    let following_count = FollowStore::count_following(pool, user_id).await?;
    let followed_count = FollowStore::count_followers(pool, user_id).await?;
    let publications_count = PublicationStore::count_by_user(pool, user_id).await?;

    Ok((name, following_count, followed_count, publications_count))
}

#[cfg(test)]
mod tests {
    use super::{
        avatar_extension, map_update_error, remove_avatar_file, stored_avatar_file, update_user,
    };
    use crate::api::user::error::UserError;
    use crate::api::user::interfaces::UpdateUser;
    use crate::database::test_util::{foreign_key_violation, unique_violation};
    use app_state::{
        ApiSettings, AppSettings, AuthSettings, DatabaseSettings, LoggingSettings,
        RateLimitingSettings, SecretSettings, UploadSettings,
    };
    use sqlx::postgres::PgPoolOptions;

    fn test_settings() -> AppSettings {
        AppSettings {
            api: ApiSettings {
                host: "127.0.0.1".to_string(),
                port: 0,
                rate_limiting: RateLimitingSettings {
                    req_per_second: 1,
                    burst_size: 1,
                },
            },
            logging: LoggingSettings {
                filter: "info".to_string(),
            },
            database: DatabaseSettings {
                max_connections: 1,
                min_connections: 0,
                max_lifetime: 1,
                idle_timeout: 1,
                acquire_timeout: 1,
            },
            auth: AuthSettings {
                token_expiry_days: 1,
                // bcrypt's minimum cost; the named constant is private in the crate.
                bcrypt_cost: 4,
            },
            uploads: UploadSettings {
                avatar_folder: std::env::temp_dir(),
                avatar_id_length: 16,
            },
            secrets: SecretSettings {
                jwt: "test-secret".to_string(),
                database_url: String::new(),
            },
        }
    }

    #[test]
    fn known_image_types_map_to_extensions() {
        assert_eq!(avatar_extension("image/png").unwrap(), "png");
        assert_eq!(avatar_extension("image/jpeg").unwrap(), "jpg");
    }

    #[test]
    fn other_types_are_rejected() {
        assert!(matches!(
            avatar_extension("application/pdf"),
            Err(UserError::UnsupportedFileType)
        ));
        assert!(matches!(
            avatar_extension("text/html"),
            Err(UserError::UnsupportedFileType)
        ));
    }

    #[tokio::test]
    async fn empty_update_is_rejected_before_any_query() {
        // A lazy pool never connects; reaching the database would hang on
        // the bogus URL instead of returning this error.
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost:1/unused")
            .unwrap();
        let result = update_user(&pool, &test_settings(), 1, UpdateUser::default()).await;
        assert!(matches!(result, Err(UserError::EmptyUpdate)));
    }

    #[test]
    fn racing_duplicate_update_maps_to_conflict() {
        assert!(matches!(
            map_update_error(unique_violation()),
            UserError::DuplicateData
        ));
        assert!(matches!(
            map_update_error(foreign_key_violation()),
            UserError::Db(_)
        ));
    }

    #[test]
    fn stored_avatar_paths_resolve_to_disk_names() {
        assert_eq!(
            stored_avatar_file("/uploads/avatars/abc123.png"),
            Some("abc123.png")
        );
        assert_eq!(stored_avatar_file("https://cdn.invalid/pic.png"), None);
        assert_eq!(stored_avatar_file("abc123.png"), None);
    }

    #[tokio::test]
    async fn replaced_avatar_file_is_removed() {
        let settings = test_settings();
        let file_name = format!("avatar-cleanup-{}.png", std::process::id());
        let path = settings.uploads.avatar_folder.join(&file_name);
        tokio::fs::write(&path, b"old").await.unwrap();

        remove_avatar_file(&settings, &file_name).await;
        assert!(!path.exists());

        // Removing an already-missing file is quietly ignored.
        remove_avatar_file(&settings, &file_name).await;
    }
}
