mod config;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("failed to read .env: {e}");
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env().expect("invalid configuration");
    tracing::info!(region = %config.catalog.region_code, base_url = %config.catalog.base_url, "catalog configured");

    let port = config.port;
    let app = routes::app(state::AppState::new(config.catalog)).expect("failed to build router");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "tubeview listening");
    axum::serve(listener, app).await.expect("server failed");
}
