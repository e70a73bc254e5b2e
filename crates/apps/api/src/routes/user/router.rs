use crate::api_state::ApiContext;
use crate::user::handlers::{
    avatar, counters, list, list_first_page, own_counters, profile, update, upload_avatar,
};
use axum::{
    Router,
    routing::{get, post, put},
};

/// Avatar retrieval is public; everything else requires a bearer token.
pub fn user_public_router() -> Router<ApiContext> {
    Router::new().route("/api/user/avatar/{id}", get(avatar))
}

pub fn user_protected_router() -> Router<ApiContext> {
    Router::new()
        .route("/api/user/profile/{id}", get(profile))
        .route("/api/user/list", get(list_first_page))
        .route("/api/user/list/{page}", get(list))
        .route("/api/user/update", put(update))
        .route("/api/user/avatar", post(upload_avatar))
        .route("/api/user/counters", get(own_counters))
        .route("/api/user/counters/{id}", get(counters))
}
