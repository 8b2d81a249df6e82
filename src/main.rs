use std::sync::Arc;

use anyhow::Context;
use ollama_chat_gateway::{config::Config, routes, state::AppState};
use tracing::info;

const DEFAULT_LOG_FILTER: &str = "ollama_chat_gateway=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with_target(true)
        .init();

    let config = Config::from_env();
    info!(
        ollama = %config.ollama_host,
        cors_origin = %config.cors_origin,
        "ollama-chat-gateway v{}",
        env!("CARGO_PKG_VERSION")
    );

    let cors = routes::cors_layer(&config.cors_origin)
        .with_context(|| format!("invalid CORS origin: {}", config.cors_origin))?;

    let state = Arc::new(AppState::with_ollama(config.ollama_host.clone()));

    let app = routes::create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to address: {}", config.bind_addr))?;

    info!(
        "listening on http://{}",
        listener.local_addr().context("failed to get local address")?
    );

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
