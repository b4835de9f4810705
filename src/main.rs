//! voice-task-skill server entry point.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use voice_task_skill::app::build_router;
use voice_task_skill::config::{
    base_path, ConfigError, ConfigProvider, ServerConfig, ValidationError,
};
use voice_task_skill::ports::HostError;

#[derive(Debug, Error)]
enum StartupError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Failed to build orchestration host: {0}")]
    Host(#[from] HostError),

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let base_path = base_path();

    let provider = ConfigProvider::new();
    let config = provider.get(&base_path)?;

    // Subscriber needs the loaded config
    init_tracing(&config.server);
    tracing::info!(base_path = %base_path.display(), "Configuration loaded");
    config.validate()?;

    let addr = config.server.socket_addr()?;
    let app = build_router(config)?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "voice-task-skill listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Installs the global subscriber. `RUST_LOG` overrides `server.log_level`.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&server.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if server.log_json {
        let _ = tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
