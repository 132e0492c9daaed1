use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use edubot::config::AppConfig;
use edubot::db::Database;
use edubot::llm::{GroqClient, ModelGateway};
use edubot::routes;
use edubot::state::AppState;
use edubot::telemetry::init_subscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Before the subscriber, so RUST_LOG from .env applies
    dotenvy::dotenv().ok();
    init_subscriber("info");

    let config = AppConfig::from_env().context("Failed to read configuration")?;

    let db = Database::connect(config.database.clone())
        .await
        .context("Failed to create connection pool")?;

    let provider = GroqClient::new(config.gateway.api_key.clone(), config.gateway.base_url.clone())
        .context("Failed to initialize Groq client")?;
    let gateway = ModelGateway::new(Arc::new(provider));
    info!(model = gateway.model(), "Groq client initialized");

    let state = AppState::new(db.clone(), gateway);

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Starting server on http://{}", addr);

    // In-flight requests finish before the pool is closed
    routes::serve(listener, state, shutdown_signal()).await;

    db.close();
    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("Shutdown signal received");
}
