use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pokedex_server::config::AppConfig;
use pokedex_server::database::init_db;
use pokedex_server::pages::PageAssets;
use pokedex_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pokedex_server=debug".into()),
        )
        .init();

    let config = AppConfig::load().context("Failed to load config")?;

    let pages = PageAssets::load(&config.assets.pages_dir)
        .await
        .context("Failed to load static pages")?;

    let db = init_db(&config.database)
        .await
        .with_context(|| format!("Failed to open database {}", config.database.url))?;
    info!(url = %config.database.url, "Database connected");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    if config.server.legacy_status_codes {
        info!("Legacy status codes enabled: invalid ids are answered with 200");
    }

    let state = AppState {
        config: Arc::new(config),
        db,
        pages: Arc::new(pages),
    };
    let app = pokedex_server::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server running at http://{}/pokemon", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutting down");
}
