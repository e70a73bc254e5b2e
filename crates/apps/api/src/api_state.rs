use app_state::AppSettings;
use axum::extract::FromRef;
use sqlx::PgPool;

#[derive(Clone)]
pub struct ApiContext {
    pub pool: PgPool,
    pub settings: AppSettings,
}

// These impls allow axum to extract the PgPool and AppSettings from the
// ApiContext, for extractors that only need one part of the state.
impl FromRef<ApiContext> for PgPool {
    fn from_ref(state: &ApiContext) -> Self {
        state.pool.clone()
    }
}

impl FromRef<ApiContext> for AppSettings {
    fn from_ref(state: &ApiContext) -> Self {
        state.settings.clone()
    }
}
