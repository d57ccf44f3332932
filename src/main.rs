use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use googrank::config::Config;
use googrank::server::{ self, AppState };
use googrank::Fetcher;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().context("invalid configuration")?;
    let fetcher = Fetcher::new(config.http_timeout, config.ssl_verify).context(
        "failed to build HTTP client"
    )?;

    let bind = config.bind;
    let state = Arc::new(AppState::new(Arc::new(fetcher), config));

    let listener = tokio::net::TcpListener::bind(bind).await
        .with_context(|| format!("failed to bind {}", bind))?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, server::router(state)).await?;
    Ok(())
}
