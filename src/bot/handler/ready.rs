//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. The handler
//! sets the configured activity and registers the slash command surface globally.
//!
//! A registration failure is logged but does not stop the bot: Discord keeps
//! serving whatever command set it already has from a previous run.

use serenity::all::{ActivityData, Command, Context, Ready};

use crate::bot::commands;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity and registering commands
/// - `ready` - Ready event data containing bot user information
/// - `activity` - Optional custom activity text to display
pub async fn handle_ready(ctx: Context, ready: Ready, activity: Option<&str>) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    if let Some(activity) = activity {
        ctx.set_activity(Some(ActivityData::custom(activity)));
    }

    let registrations = commands::registrations();
    let count = registrations.len();

    match Command::set_global_commands(&ctx.http, registrations).await {
        Ok(_) => tracing::info!("Registered {} slash commands", count),
        Err(e) => tracing::error!("Failed to register slash commands: {:?}", e),
    }
}
