use axum::{
    routing::{get, put},
    Router,
};
use database::EmissionTypeRepository;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer, ExposeHeaders},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
///
/// The repository is constructed once at startup and handed to the router
/// explicitly; there is no implicit registry behind the handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: EmissionTypeRepository,
}

/// Builds the application router for the given state.
///
/// Kept separate from `run_server` so the integration tests can drive the
/// exact same routes against a test database.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route(
            "/api/v1/emission_types/ids/:id",
            get(handlers::retrieve_emission_type),
        )
        .route(
            "/api/v1/emission_types/all",
            get(handlers::retrieve_emission_types).post(handlers::create_emission_types),
        )
        .route(
            "/api/v1/emission_types",
            put(handlers::update_emission_type),
        )
        .with_state(state)
}

/// The main function to configure and run the web server.
pub async fn run_server(addr: SocketAddr) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let db_pool = database::connect().await?;
    database::run_migrations(&db_pool).await?;
    let repo = EmissionTypeRepository::new(db_pool);

    let app_state = Arc::new(AppState { repo });
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any())
        .expose_headers(ExposeHeaders::any());

    let app = router(app_state)
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http());

    tracing::info!("Web server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
