//! HTTP handlers for profile, listing, update, avatar and counters.

use crate::api_state::ApiContext;
use crate::auth::middlewares::user::ApiUser;
use axum::extract::{Multipart, Path, Query, State};
use axum::{Extension, Json};
use common_services::api::pagination::{Page, PageQuery};
use common_services::api::user::error::UserError;
use common_services::api::user::interfaces::{
    AvatarResponse, AvatarUploadResponse, CountersResponse, ProfileResponse, UpdateResponse,
    UpdateUser, UserListResponse,
};
use common_services::api::user::service::{
    get_avatar, get_counters, get_profile, list_users, store_avatar, update_user,
};
use common_services::database::app_user::User;
use tracing::instrument;

/// Public profile of a user, with the follow relation between the caller
/// and the target.
#[utoipa::path(
    get,
    path = "/api/user/profile/{id}",
    tag = "User",
    params(("id" = i32, Path, description = "Target user id")),
    responses(
        (status = 200, description = "Profile with follow info", body = ProfileResponse),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "User not found"),
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(context, caller), err(Debug))]
pub async fn profile(
    State(context): State<ApiContext>,
    Extension(caller): Extension<User>,
    Path(target_id): Path<i32>,
) -> Result<Json<ProfileResponse>, UserError> {
    let (user, follow_info) = get_profile(&context.pool, caller.id, target_id).await?;
    Ok(Json(ProfileResponse {
        status: "success".to_string(),
        user,
        follow_info,
    }))
}

/// First page of the user listing.
#[utoipa::path(
    get,
    path = "/api/user/list",
    tag = "User",
    params(PageQuery),
    responses(
        (status = 200, description = "Paginated users", body = UserListResponse),
        (status = 404, description = "No users available"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_first_page(
    State(context): State<ApiContext>,
    Query(query): Query<PageQuery>,
) -> Result<Json<UserListResponse>, UserError> {
    list_page_response(&context, Page::new(None, query.limit)).await
}

/// Paginated user listing; page number in the path, page size in the
/// `limit` query parameter.
#[utoipa::path(
    get,
    path = "/api/user/list/{page}",
    tag = "User",
    params(
        ("page" = i64, Path, description = "Page number, starting at 1"),
        PageQuery,
    ),
    responses(
        (status = 200, description = "Paginated users", body = UserListResponse),
        (status = 404, description = "No users available"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn list(
    State(context): State<ApiContext>,
    Path(page): Path<i64>,
    Query(query): Query<PageQuery>,
) -> Result<Json<UserListResponse>, UserError> {
    list_page_response(&context, Page::new(Some(page), query.limit)).await
}

async fn list_page_response(
    context: &ApiContext,
    page: Page,
) -> Result<Json<UserListResponse>, UserError> {
    let (users, total_docs, total_pages) = list_users(&context.pool, page).await?;
    Ok(Json(UserListResponse {
        status: "success".to_string(),
        users,
        total_docs,
        total_pages,
        current_page: page.number,
    }))
}

/// Updates the caller's own record from an allow-listed payload.
#[utoipa::path(
    put,
    path = "/api/user/update",
    tag = "User",
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = UpdateResponse),
        (status = 400, description = "Payload contains no updatable field"),
        (status = 401, description = "Authentication required"),
        (status = 409, description = "Email or nick already in use"),
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(context, caller, payload), err(Debug))]
pub async fn update(
    State(context): State<ApiContext>,
    ApiUser(caller): ApiUser,
    Json(payload): Json<UpdateUser>,
) -> Result<Json<UpdateResponse>, UserError> {
    let user = update_user(&context.pool, &context.settings, caller.id, payload).await?;
    Ok(Json(UpdateResponse {
        status: "success".to_string(),
        message: "User updated successfully".to_string(),
        user,
    }))
}

/// Stores an uploaded avatar image and records its public URL on the
/// caller's record. Expects a multipart `file` part.
#[utoipa::path(
    post,
    path = "/api/user/avatar",
    tag = "User",
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Avatar stored", body = AvatarUploadResponse),
        (status = 400, description = "Request does not include a file"),
        (status = 415, description = "Unsupported image type"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn upload_avatar(
    State(context): State<ApiContext>,
    ApiUser(caller): ApiUser,
    mut multipart: Multipart,
) -> Result<Json<AvatarUploadResponse>, UserError> {
    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| UserError::MissingFile)?
    {
        if field.name() == Some("file") {
            let content_type = field
                .content_type()
                .ok_or(UserError::UnsupportedFileType)?
                .to_string();
            let bytes = field.bytes().await.map_err(|_| UserError::UploadFailed)?;
            upload = Some((content_type, bytes.to_vec()));
            break;
        }
    }
    let (content_type, bytes) = upload.ok_or(UserError::MissingFile)?;

    let (user, file) =
        store_avatar(&context.pool, &context.settings, caller.id, &content_type, &bytes).await?;
    Ok(Json(AvatarUploadResponse {
        status: "success".to_string(),
        user,
        file,
    }))
}

/// Returns the stored avatar URL for a user.
#[utoipa::path(
    get,
    path = "/api/user/avatar/{id}",
    tag = "User",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Stored avatar URL", body = AvatarResponse),
        (status = 404, description = "No such user or no image"),
    )
)]
pub async fn avatar(
    State(context): State<ApiContext>,
    Path(user_id): Path<i32>,
) -> Result<Json<AvatarResponse>, UserError> {
    let image_url = get_avatar(&context.pool, user_id).await?;
    Ok(Json(AvatarResponse {
        status: "success".to_string(),
        image_url,
    }))
}

/// Counters for the caller's own profile.
#[utoipa::path(
    get,
    path = "/api/user/counters",
    tag = "User",
    responses(
        (status = 200, description = "Follower/followed/publication counts", body = CountersResponse),
        (status = 404, description = "User not found"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn own_counters(
    State(context): State<ApiContext>,
    ApiUser(caller): ApiUser,
) -> Result<Json<CountersResponse>, UserError> {
    counters_response(&context, caller.id).await
}

/// Counters for the user in the path; the path id takes precedence over
/// the caller's own id.
#[utoipa::path(
    get,
    path = "/api/user/counters/{id}",
    tag = "User",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Follower/followed/publication counts", body = CountersResponse),
        (status = 404, description = "User not found"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn counters(
    State(context): State<ApiContext>,
    Path(user_id): Path<i32>,
) -> Result<Json<CountersResponse>, UserError> {
    counters_response(&context, user_id).await
}

async fn counters_response(
    context: &ApiContext,
    user_id: i32,
) -> Result<Json<CountersResponse>, UserError> {
    let (name, following_count, followed_count, publications_count) =
        get_counters(&context.pool, user_id).await?;
    Ok(Json(CountersResponse {
        status: "success".to_string(),
        user_id,
        name: name.name,
        last_name: name.last_name,
        following_count,
        followed_count,
        publications_count,
    }))
}
