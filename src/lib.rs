pub mod api;
pub mod config;
pub mod core_state;
pub mod models;
pub mod queue;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Start the front desk: logging, shared state, HTTP API until Ctrl-C.
pub async fn run() -> Result<(), String> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let addr = config::bind_addr()?;
    let core = Arc::new(core_state::CoreState::new());
    let mut server = api::server::start_desk_server(core, addr).await?;
    tracing::info!(addr = %server.session.server_addr, "Front desk API listening");

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| format!("Failed to listen for shutdown signal: {e}"))?;
    server.shutdown();
    Ok(())
}
