use folio_cms::{AppState, BroadcastNotifier};
use folio_config::Config;
use folio_server::error::Result as ServerErrorResult;
use folio_server::{build_router, logger};

use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(log_dir) = log_file_path.as_deref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(log_dir)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting folio-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Connect and migrate
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = folio_db::connect(&database_path, config.database.max_connections).await?;

    let notifier = Arc::new(BroadcastNotifier::default());
    let change_logger = notifier.spawn_change_logger();
    let app_state = AppState::new(pool.clone(), config.validation.clone(), notifier);
    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Actual address matters when port is 0 / auto-assigned
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    change_logger.abort();
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
