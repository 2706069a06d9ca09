use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

use showfloor_backend::config::AppConfig;
use showfloor_backend::{app, spawn_limiter_pruning, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,showfloor_backend=debug"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = AppConfig::from_env().context("reading configuration")?;
    let port = config.port;
    tracing::info!("serving frontend from {}", config.static_dir.display());
    if !config.static_dir.join("index.html").exists() {
        tracing::warn!("{} has no index.html, build the frontend first", config.static_dir.display());
    }

    let state = Arc::new(AppState::from_config(config).context("setting up contact delivery")?);
    spawn_limiter_pruning(Arc::clone(&state));
    let app = app(state);

    tracing::info!("Starting server on port {}", port);
    let listener = TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .with_context(|| format!("binding port {}", port))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("server stopped")?;
    Ok(())
}
