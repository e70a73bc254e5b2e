use crate::api_state::ApiContext;
use crate::follow::handlers::{follow, followers, following, unfollow};
use axum::{
    Router,
    routing::{get, post},
};

pub fn follow_protected_router() -> Router<ApiContext> {
    Router::new()
        .route("/api/follow/{id}", post(follow).delete(unfollow))
        .route("/api/follow/following/{id}/{page}", get(following))
        .route("/api/follow/followers/{id}/{page}", get(followers))
}
