use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use hotel_api_rust::{
    config::{Config, StorageBackend},
    constants::API_NAME,
    handlers::{build_router, AppState},
    repository::{HotelRepository, InMemoryHotelRepository, PgHotelRepository},
    service::HotelService,
};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("{} Starting Hotel API server on port {}", API_NAME, config.server_port);

    let repository = connect_repository(&config).await?;
    let service = HotelService::new(repository);
    let app = build_router(AppState::new(service, config.page_max_size));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("{} Server listening on {}", API_NAME, addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("{} Server stopped", API_NAME);
    Ok(())
}

async fn connect_repository(config: &Config) -> anyhow::Result<Arc<dyn HotelRepository>> {
    match config.storage_backend {
        StorageBackend::Memory => {
            tracing::warn!("{} Using in-memory storage, data is lost on restart", API_NAME);
            Ok(Arc::new(InMemoryHotelRepository::new()))
        }
        StorageBackend::Postgres => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .connect(&config.database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("{} Connected to database", API_NAME);

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;
            tracing::info!("{} Database migrations completed", API_NAME);

            Ok(Arc::new(PgHotelRepository::new(pool)))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("{} Failed to listen for shutdown signal: {}", API_NAME, e);
        std::future::pending::<()>().await;
    }
    tracing::info!("{} Shutdown signal received", API_NAME);
}
