mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod util;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError, service::economy::EconomyEngine};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    let engine = Arc::new(EconomyEngine::new());

    // Initial settings load; a failure here keeps the built-in defaults until
    // the refresh job succeeds.
    if let Err(e) = engine.reload(&db).await {
        tracing::warn!("Initial economy settings load failed, using defaults: {}", e);
    }

    let (mut client, discord_http) = bot::start::init_bot(&config, db.clone(), engine.clone()).await?;

    scheduler::start_scheduler(
        db,
        engine,
        discord_http,
        config.guild_whitelist.clone(),
    )
    .await?;

    tracing::info!("Starting Discord bot...");

    // Runs until the gateway connection shuts down
    client.start().await?;

    Ok(())
}
