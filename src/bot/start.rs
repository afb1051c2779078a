use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;

use crate::{bot::Handler, config::Config, error::AppError, service::economy::EconomyEngine};

/// Builds the Discord client and extracts its shared HTTP handle.
///
/// The returned `Http` client is shared with the scheduler (guild whitelist
/// pruning) so background jobs can call the Discord API without a second
/// connection. Call `Client::start` on the returned client to connect; it
/// blocks until shutdown.
///
/// # Arguments
/// - `config` - Application configuration with the bot token and activity
/// - `db` - Database connection for the command handlers
/// - `engine` - Shared economy engine
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Built client and its HTTP handle
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
    engine: Arc<EconomyEngine>,
) -> Result<(Client, Arc<Http>), AppError> {
    let intents = GatewayIntents::GUILDS;

    let handler = Handler::new(db, engine, config.bot_activity.clone());

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}
