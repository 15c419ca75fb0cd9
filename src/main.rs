use anyhow::Result;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use translation_judge::config_manager::AppConfig;
use translation_judge::routes;
use translation_judge::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Optional .env file, real environment variables take precedence
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("translation_judge=debug,tower_http=debug")),
        )
        .init();

    let config = AppConfig::load()?;
    info!(
        "Loaded configuration: provider={}, endpoint={}",
        config.bridge.provider.as_str(),
        config.bridge.endpoint()
    );
    if config.bridge.api_key().is_none() {
        warn!("{} is not set, LLM calls may be rejected", config.bridge.api_key_env());
    }

    let listener = config.server.bind().await?;
    let app = routes::build_app(AppState::new(config)?);

    info!("Starting server on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down..."),
        Err(e) => error!("Failed to listen for shutdown signal: {}", e),
    }
}
