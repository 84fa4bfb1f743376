use clap::Parser;
use membership_server::{app_with, serve_until, RecordStore, ServerConfig, ServerError};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let config = ServerConfig::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            address: addr.clone(),
            source,
        })?;

    let options = config.router_options();
    tracing::info!(
        address = %addr,
        legacy_key_field = options.legacy_key_field,
        "membership API listening on /membership_api/"
    );

    let store = RecordStore::shared();
    serve_until(listener, app_with(store.clone(), options), shutdown_signal()).await?;

    tracing::info!(records = store.len().await, "membership server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
