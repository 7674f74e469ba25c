mod config;
mod pages;
mod routes;
mod shopify;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::AppConfig::from_env().expect("invalid configuration");
    let admin = shopify::AdminClient::new(&config).expect("admin client init failed");
    tracing::info!(endpoint = admin.endpoint(), function_id = %config.function_id, "admin API client initialized");

    let port = config.port;
    let state = state::AppState::new(Arc::new(admin), config);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "delivery customizer listening");
    axum::serve(listener, app).await.expect("server failed");
}
