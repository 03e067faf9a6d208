use std::error::Error;

use ai_llm_service::telemetry;
use api::ServerConfig;
use tracing::{Level, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // `.env` is optional; a present but unreadable/invalid file is fatal.
    let dotenv = match dotenvy::dotenv() {
        Ok(path) => Some(path),
        Err(e) if e.not_found() => None,
        Err(e) => return Err(e.into()),
    };

    tracing_subscriber::registry()
        .with(telemetry::env_filter(Level::INFO))
        .with(telemetry::layer(telemetry::APP_TARGETS))
        .init();

    if let Some(path) = dotenv {
        info!(path = %path.display(), "loaded .env");
    }

    let config = ServerConfig::from_env()?;
    api::start(config).await?;

    Ok(())
}
