//! CodeCatalog - Application Entry Point
//!
//! This is the main entry point for the CodeCatalog server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use codecatalog::{
    config::CONFIG,
    db::{
        self,
        repositories::{PgProblemRepository, PgSubmissionRepository, PgTestCaseRepository},
    },
    handlers,
    services::{CatalogService, SubmissionService},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting CodeCatalog server...");

    // Initialize database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&CONFIG.database).await?;

    // Run database migrations
    tracing::info!("Running database migrations...");
    db::run_migrations(&db_pool).await?;

    // Wire up services
    let catalog = Arc::new(CatalogService::new(
        Arc::new(PgProblemRepository::new(db_pool.clone())),
        Arc::new(PgTestCaseRepository::new(db_pool.clone())),
    ));
    let submissions = Arc::new(SubmissionService::new(
        catalog.clone(),
        Arc::new(PgSubmissionRepository::new(db_pool.clone())),
    ));

    // Warm the cache and build the test case trees before taking traffic
    catalog.initialize().await?;

    // Create application state
    let state = AppState::new(catalog, submissions, CONFIG.clone());

    // Build the router
    let app = Router::new()
        .nest("/api", handlers::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
