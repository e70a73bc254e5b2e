use crate::api_state::ApiContext;
use crate::auth::handlers::{login, register};
use app_state::RateLimitingSettings;
use axum::{Router, routing::post};
use tower_governor::{GovernorLayer, governor::GovernorConfigBuilder};
use tracing::info;

pub fn auth_public_router(rate_limiting: &RateLimitingSettings) -> Router<ApiContext> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(rate_limiting.req_per_second)
        .burst_size(rate_limiting.burst_size)
        .finish()
        .expect("Could not create rate-limiting governor.");

    info!(
        "Rate limiting auth routes: {} req/s, burst {}",
        rate_limiting.req_per_second, rate_limiting.burst_size
    );

    Router::new()
        .route("/api/user/register", post(register))
        .route("/api/user/login", post(login))
        .layer(GovernorLayer::new(governor_conf))
}
