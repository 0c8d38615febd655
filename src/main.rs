//! LocalLib Catalog Server
//!
//! A Rust catalog server for a small local library.

use axum::{
    routing::get,
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use locallib_server::{
    api,
    config::AppConfig,
    repository::Repository,
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("locallib_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting LocalLib Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.catalog.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    let catalog = Router::new()
        // Home
        .route("/", get(api::pages::index))
        // Books
        .route("/books", get(api::books::list))
        .route("/books/create", get(api::books::create_form).post(api::books::create_submit))
        .route("/books/:id", get(api::books::detail))
        .route("/books/:id/update", get(api::books::update_form).post(api::books::update_submit))
        .route("/books/:id/delete", get(api::books::delete_form).post(api::books::delete_submit))
        // Authors
        .route("/authors", get(api::authors::list))
        .route("/authors/create", get(api::authors::create_form).post(api::authors::create_submit))
        .route("/authors/:id", get(api::authors::detail))
        .route("/authors/:id/update", get(api::authors::update_form).post(api::authors::update_submit))
        .route("/authors/:id/delete", get(api::authors::delete_form).post(api::authors::delete_submit))
        // Genres
        .route("/genres", get(api::genres::list))
        .route("/genres/create", get(api::genres::create_form).post(api::genres::create_submit))
        .route("/genres/:id", get(api::genres::detail))
        .route("/genres/:id/update", get(api::genres::update_form).post(api::genres::update_submit))
        .route("/genres/:id/delete", get(api::genres::delete_form).post(api::genres::delete_submit))
        // Book instances
        .route("/bookinstances", get(api::book_instances::list))
        .route(
            "/bookinstances/create",
            get(api::book_instances::create_form).post(api::book_instances::create_submit),
        )
        .route("/bookinstances/:id", get(api::book_instances::detail))
        .route(
            "/bookinstances/:id/update",
            get(api::book_instances::update_form).post(api::book_instances::update_submit),
        )
        .route(
            "/bookinstances/:id/delete",
            get(api::book_instances::delete_form).post(api::book_instances::delete_submit),
        );

    Router::new()
        .route("/", get(api::pages::root))
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        .nest("/catalog", catalog)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
}
