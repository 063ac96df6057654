//! Flight Plan Relay - Binary Entry Point

use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use flight_plan_relay::{create_router, serve, shutdown, AppContext, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    config.validate()?;
    info!(
        port = config.port,
        upstream = %config.upstream_url,
        history_capacity = config.history_capacity,
        reconnect = config.reconnect,
        "configuration loaded"
    );

    let ctx = Arc::new(AppContext::new(config.history_capacity));

    // Ingestion runs on its own task; its failures never stop the API
    let upstream = ctx.connector(config.connector_config()).spawn();

    let listener = TcpListener::bind(config.bind_addr()).await?;
    let router = create_router(ctx, config.static_dir());
    serve(listener, router, shutdown::install()?).await?;

    upstream.abort();
    Ok(())
}
