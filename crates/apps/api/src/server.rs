use crate::api_state::ApiContext;
use crate::create_router;
use app_state::AppSettings;
use axum::routing::get_service;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use common_services::database::get_db_pool;
use http::{Method, header};
use std::iter::once;
use std::net::SocketAddr;
use tower_http::cors::{self, CorsLayer};
use tower_http::sensitive_headers::SetSensitiveRequestHeadersLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn serve(settings: AppSettings) -> Result<()> {
    info!("Initializing server...");
    let pool = get_db_pool(&settings).await?;
    sqlx::migrate!().run(&pool).await?;

    let api_state = ApiContext {
        pool,
        settings: settings.clone(),
    };

    // --- CORS Configuration ---
    // Any origin, with the verb set the frontend uses. Preflight is
    // answered by the layer itself.
    let cors = CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ORIGIN,
            header::USER_AGENT,
        ]);

    // Static file serving for uploaded avatars.
    let serve_avatars = ServeDir::new(&settings.uploads.avatar_folder);

    let app = create_router(api_state)
        .nest_service("/uploads/avatars", get_service(serve_avatars))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetSensitiveRequestHeadersLayer::new(once(
            header::AUTHORIZATION,
        )));

    let addr: SocketAddr = format!("{}:{}", settings.api.host, settings.api.port)
        .parse()
        .map_err(|e| eyre!("Invalid address: {e}"))?;

    info!("Server listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}
