//! Periodic guild whitelist enforcement.
//!
//! When a whitelist is configured, the bot periodically enumerates the guilds
//! it is in and leaves any guild not on the list. A failure to leave one guild
//! is logged and does not stop the rest of the sweep.

use std::sync::Arc;

use serenity::all::GuildPagination;
use serenity::http::Http;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::error::AppError;

/// Registers the whitelist prune job, running every ten minutes.
///
/// # Arguments
/// - `scheduler` - Scheduler to register the job with
/// - `discord_http` - Discord HTTP client used to list and leave guilds
/// - `whitelist` - Guild IDs the bot is allowed to stay in
///
/// # Returns
/// - `Ok(())` - Job registered
/// - `Err(AppError)` - Failed to create or register the job
pub async fn schedule(
    scheduler: &JobScheduler,
    discord_http: Arc<Http>,
    whitelist: Vec<u64>,
) -> Result<(), AppError> {
    let job = Job::new_async("0 */10 * * * *", move |_uuid, _lock| {
        let http = discord_http.clone();
        let whitelist = whitelist.clone();

        Box::pin(async move {
            if let Err(e) = prune_guilds(&http, &whitelist).await {
                tracing::error!("Guild whitelist sweep failed: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;

    Ok(())
}

/// Walks the bot's guilds and leaves every one missing from the whitelist.
///
/// Guild listing is paginated; each page is processed before fetching the
/// next, so even large bot installations get swept completely.
///
/// # Arguments
/// - `http` - Discord HTTP client
/// - `whitelist` - Guild IDs the bot is allowed to stay in
///
/// # Returns
/// - `Ok(())` - Sweep completed (individual leave failures are logged)
/// - `Err(AppError)` - Failed to list the bot's guilds
async fn prune_guilds(http: &Http, whitelist: &[u64]) -> Result<(), AppError> {
    let mut after = None;

    loop {
        let page = http
            .get_guilds(after.map(GuildPagination::After), Some(100))
            .await?;

        if page.is_empty() {
            return Ok(());
        }

        after = page.last().map(|guild| guild.id);

        for guild in page {
            if whitelist.contains(&guild.id.get()) {
                continue;
            }

            match http.leave_guild(guild.id).await {
                Ok(()) => {
                    tracing::info!("Left non-whitelisted guild {} ({})", guild.name, guild.id)
                }
                Err(e) => tracing::error!(
                    "Failed to leave guild {} ({}): {:?}",
                    guild.name,
                    guild.id,
                    e
                ),
            }
        }
    }
}
