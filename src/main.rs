use lead_tracker::config::Config;
use lead_tracker::obs;
use lead_tracker::routes::app_with_config;

/// Main entry point for the lead tracker backend.
///
/// Initialises tracing and configuration, builds the router around a fresh
/// in-memory store and serves it until the process receives Ctrl-C.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    obs::init_tracing(obs::SERVER_FILTER);

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded successfully");

    let app = app_with_config(&config);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
