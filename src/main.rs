use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sse_typewriter_demo::config::Config;
use sse_typewriter_demo::state::AppState;
use sse_typewriter_demo::web;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sse_typewriter_demo=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("🚀 Starting SSE typewriter demo");

    // Load configuration
    let config = Config::from_env()?;

    // Create application state
    let state = AppState::new(config);

    // Start web server
    web::start_server(state).await?;

    Ok(())
}
