use crate::api_state::ApiContext;
use crate::publication::handlers::{create, detail, remove, user_page};
use axum::{
    Router,
    routing::{get, post},
};

pub fn publication_protected_router() -> Router<ApiContext> {
    Router::new()
        .route("/api/publication", post(create))
        .route("/api/publication/{id}", get(detail).delete(remove))
        .route("/api/publication/user/{id}/{page}", get(user_page))
}
