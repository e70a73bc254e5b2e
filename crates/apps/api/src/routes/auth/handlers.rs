//! HTTP handlers for registration and login.

use crate::api_state::ApiContext;
use axum::{Json, extract::State, http::StatusCode};
use common_services::api::auth::error::AuthError;
use common_services::api::auth::interfaces::{
    LoginResponse, LoginUser, RegisterResponse, RegisterUser,
};
use common_services::api::auth::service::{login_user, register_user};
use tracing::instrument;

/// Registers a new user.
///
/// # Errors
///
/// Returns `AuthError` when required fields are missing, when a user with
/// the same case-folded email or nick already exists, or on database
/// failure.
#[utoipa::path(
    post,
    path = "/api/user/register",
    tag = "Auth",
    request_body = RegisterUser,
    responses(
        (status = 201, description = "User registered", body = RegisterResponse),
        (status = 400, description = "Missing required fields"),
        (status = 409, description = "User with this email or nick already exists"),
    )
)]
#[instrument(skip(context, payload), err(Debug))]
pub async fn register(
    State(context): State<ApiContext>,
    Json(payload): Json<RegisterUser>,
) -> Result<(StatusCode, Json<RegisterResponse>), AuthError> {
    let user = register_user(&context.pool, &context.settings, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            status: "created".to_string(),
            message: "User registered successfully".to_string(),
            user,
        }),
    ))
}

/// Authenticates a user and returns a signed bearer token plus a filtered
/// user projection.
///
/// # Errors
///
/// Returns `AuthError` when credentials are missing, unknown or wrong.
#[utoipa::path(
    post,
    path = "/api/user/login",
    tag = "Auth",
    request_body = LoginUser,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Missing required fields"),
        (status = 401, description = "Wrong password"),
        (status = 404, description = "No user with that email"),
    )
)]
#[instrument(skip(context, payload), err(Debug))]
pub async fn login(
    State(context): State<ApiContext>,
    Json(payload): Json<LoginUser>,
) -> Result<Json<LoginResponse>, AuthError> {
    let (token, user) = login_user(&context.pool, &context.settings, payload).await?;
    Ok(Json(LoginResponse {
        status: "success".to_string(),
        message: "Login successful".to_string(),
        token,
        user,
    }))
}
