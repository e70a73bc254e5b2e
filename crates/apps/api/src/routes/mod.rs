mod api_doc;
pub mod auth;
pub mod follow;
pub mod publication;
pub mod root;
pub mod user;

use crate::api_state::ApiContext;
use crate::auth::router::auth_public_router;
use crate::follow::router::follow_protected_router;
use crate::publication::router::publication_protected_router;
use crate::root::router::root_public_router;
use crate::routes::api_doc::ApiDoc;
use crate::routes::auth::middlewares::user::ApiUser;
use crate::user::router::{user_protected_router, user_public_router};
use axum::Router;
use axum::middleware::from_extractor_with_state;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// --- Router Construction ---
pub fn create_router(api_state: ApiContext) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .merge(public_routes(&api_state))
        .merge(protected_routes(api_state.clone()))
        .with_state(api_state)
}

fn public_routes(api_state: &ApiContext) -> Router<ApiContext> {
    Router::new()
        .merge(root_public_router())
        .merge(auth_public_router(&api_state.settings.api.rate_limiting))
        .merge(user_public_router())
}

fn protected_routes(api_state: ApiContext) -> Router<ApiContext> {
    Router::new()
        .merge(user_protected_router())
        .merge(follow_protected_router())
        .merge(publication_protected_router())
        .route_layer(from_extractor_with_state::<ApiUser, ApiContext>(api_state))
}
