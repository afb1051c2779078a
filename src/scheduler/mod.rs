//! Background jobs driven by the cron scheduler.
//!
//! Two jobs run for the bot's lifetime:
//! - economy settings refresh, every minute
//! - guild whitelist pruning, every ten minutes (only when a whitelist is
//!   configured)
//!
//! Jobs log their own failures and never take the scheduler down.

pub mod guild_whitelist;
pub mod settings_refresh;

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::http::Http;
use tokio_cron_scheduler::JobScheduler;

use crate::{error::AppError, service::economy::EconomyEngine};

/// Starts the background job scheduler.
///
/// # Arguments
/// - `db` - Database connection for the settings refresh job
/// - `engine` - Economy engine whose configuration gets refreshed
/// - `discord_http` - Discord HTTP client for the whitelist prune job
/// - `guild_whitelist` - Allowed guild IDs; `None` disables pruning
///
/// # Returns
/// - `Ok(())` - Scheduler running with all jobs registered
/// - `Err(AppError)` - Failed to create, register, or start jobs
pub async fn start_scheduler(
    db: DatabaseConnection,
    engine: Arc<EconomyEngine>,
    discord_http: Arc<Http>,
    guild_whitelist: Option<Vec<u64>>,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    settings_refresh::schedule(&scheduler, db, engine).await?;

    if let Some(whitelist) = guild_whitelist {
        guild_whitelist::schedule(&scheduler, discord_http, whitelist).await?;
    }

    scheduler.start().await?;

    tracing::info!("Background job scheduler started");

    Ok(())
}
