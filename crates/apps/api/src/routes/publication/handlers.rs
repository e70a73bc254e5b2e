//! HTTP handlers for publications.

use crate::api_state::ApiContext;
use crate::auth::middlewares::user::ApiUser;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use common_services::api::pagination::{Page, PageQuery};
use common_services::api::publication::error::PublicationError;
use common_services::api::publication::interfaces::{
    CreatePublication, DeletePublicationResponse, PublicationListResponse, PublicationResponse,
};
use common_services::api::publication::service::{
    create_publication, delete_publication, get_publication, user_publications,
};
use tracing::instrument;

/// Saves a new publication for the caller.
#[utoipa::path(
    post,
    path = "/api/publication",
    tag = "Publication",
    request_body = CreatePublication,
    responses(
        (status = 201, description = "Publication saved", body = PublicationResponse),
        (status = 400, description = "Text is missing or blank"),
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(context, caller, payload), err(Debug))]
pub async fn create(
    State(context): State<ApiContext>,
    ApiUser(caller): ApiUser,
    Json(payload): Json<CreatePublication>,
) -> Result<(StatusCode, Json<PublicationResponse>), PublicationError> {
    let publication = create_publication(&context.pool, caller.id, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(PublicationResponse {
            status: "success".to_string(),
            publication,
        }),
    ))
}

/// A single publication by id.
#[utoipa::path(
    get,
    path = "/api/publication/{id}",
    tag = "Publication",
    params(("id" = i32, Path, description = "Publication id")),
    responses(
        (status = 200, description = "The publication", body = PublicationResponse),
        (status = 404, description = "Publication not found"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn detail(
    State(context): State<ApiContext>,
    Path(publication_id): Path<i32>,
) -> Result<Json<PublicationResponse>, PublicationError> {
    let publication = get_publication(&context.pool, publication_id).await?;
    Ok(Json(PublicationResponse {
        status: "success".to_string(),
        publication,
    }))
}

/// Deletes one of the caller's own publications.
#[utoipa::path(
    delete,
    path = "/api/publication/{id}",
    tag = "Publication",
    params(("id" = i32, Path, description = "Publication id")),
    responses(
        (status = 200, description = "Publication removed", body = DeletePublicationResponse),
        (status = 403, description = "Caller does not own this publication"),
        (status = 404, description = "Publication not found"),
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(context, caller), err(Debug))]
pub async fn remove(
    State(context): State<ApiContext>,
    ApiUser(caller): ApiUser,
    Path(publication_id): Path<i32>,
) -> Result<Json<DeletePublicationResponse>, PublicationError> {
    delete_publication(&context.pool, caller.id, publication_id).await?;
    Ok(Json(DeletePublicationResponse {
        status: "success".to_string(),
        message: "Publication removed".to_string(),
    }))
}

/// A user's publications, newest first.
#[utoipa::path(
    get,
    path = "/api/publication/user/{id}/{page}",
    tag = "Publication",
    params(
        ("id" = i32, Path, description = "User id"),
        ("page" = i64, Path, description = "Page number, starting at 1"),
        PageQuery,
    ),
    responses(
        (status = 200, description = "Paginated publications", body = PublicationListResponse),
    ),
    security(("bearer_auth" = []))
)]
pub async fn user_page(
    State(context): State<ApiContext>,
    Path((user_id, page)): Path<(i32, i64)>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PublicationListResponse>, PublicationError> {
    let page = Page::new(Some(page), query.limit);
    let (publications, total_docs, total_pages) =
        user_publications(&context.pool, user_id, page).await?;
    Ok(Json(PublicationListResponse {
        status: "success".to_string(),
        publications,
        total_docs,
        total_pages,
        current_page: page.number,
    }))
}
