//! Slash command surface for the economy feature.
//!
//! Every command lives in its own module exposing `register()` (the command
//! definition sent to Discord) and `run()` (the handler). The registry below is
//! the single static list of commands — adding a command means adding a module
//! and listing it here; nothing is discovered at runtime.

pub mod balance;
pub mod daily;
pub mod economy_help;
pub mod economy_info;
pub mod leaderboard;
pub mod profile;
pub mod set_steam;
pub mod top_invites;
pub mod transfer;
pub mod work;

use serenity::all::{
    CommandInteraction, Context, Colour, CreateCommand, CreateEmbed,
    CreateInteractionResponse, CreateInteractionResponseMessage,
};

use crate::{bot::Handler, error::AppError};

/// Builds the command definitions for global registration.
///
/// # Returns
/// - `Vec<CreateCommand>` - One definition per command module
pub fn registrations() -> Vec<CreateCommand> {
    vec![
        balance::register(),
        daily::register(),
        economy_help::register(),
        economy_info::register(),
        leaderboard::register(),
        profile::register(),
        set_steam::register(),
        top_invites::register(),
        transfer::register(),
        work::register(),
    ]
}

/// Dispatches a command interaction to its handler by name.
///
/// Unknown names are logged and ignored; they can briefly occur while a
/// registration update propagates through Discord.
///
/// # Arguments
/// - `handler` - Bot handler holding the database connection and engine
/// - `ctx` - Discord context
/// - `command` - The command interaction to dispatch
///
/// # Returns
/// - `Ok(())` - Command handled (including user-visible domain failures)
/// - `Err(AppError)` - Unexpected failure, handled by the error boundary
pub async fn dispatch(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    match command.data.name.as_str() {
        balance::NAME => balance::run(handler, ctx, command).await,
        daily::NAME => daily::run(handler, ctx, command).await,
        economy_help::NAME => economy_help::run(handler, ctx, command).await,
        economy_info::NAME => economy_info::run(handler, ctx, command).await,
        leaderboard::NAME => leaderboard::run(handler, ctx, command).await,
        profile::NAME => profile::run(handler, ctx, command).await,
        set_steam::NAME => set_steam::run(handler, ctx, command).await,
        top_invites::NAME => top_invites::run(handler, ctx, command).await,
        transfer::NAME => transfer::run(handler, ctx, command).await,
        work::NAME => work::run(handler, ctx, command).await,
        unknown => {
            tracing::warn!("Received unknown command /{}", unknown);
            Ok(())
        }
    }
}

/// Embed accent color used across all economy replies.
pub(crate) const EMBED_COLOUR: Colour = Colour::BLURPLE;

/// Sends an embed response to a command interaction.
pub(crate) async fn respond_embed(
    ctx: &Context,
    command: &CommandInteraction,
    embed: CreateEmbed,
    ephemeral: bool,
) -> Result<(), AppError> {
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .embed(embed)
            .ephemeral(ephemeral),
    );

    command.create_response(&ctx.http, response).await?;

    Ok(())
}

/// Sends a plain text response to a command interaction.
pub(crate) async fn respond_text(
    ctx: &Context,
    command: &CommandInteraction,
    content: impl Into<String>,
    ephemeral: bool,
) -> Result<(), AppError> {
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(ephemeral),
    );

    command.create_response(&ctx.http, response).await?;

    Ok(())
}

/// Returns the invoking user's display name, preferring their guild nickname.
pub(crate) fn invoker_name(command: &CommandInteraction) -> String {
    match command.member.as_deref() {
        Some(member) => member.display_name().to_string(),
        None => command.user.display_name().to_string(),
    }
}

/// Resolves the invoking member's role names for bonus computation.
///
/// Role IDs come from the interaction's member; names resolve against the
/// guild's role list, using the cache when populated and falling back to the
/// API otherwise. Outside a guild (or if the lookup fails) the caller simply
/// gets no bonus.
pub(crate) async fn member_role_names(ctx: &Context, command: &CommandInteraction) -> Vec<String> {
    let (Some(guild_id), Some(member)) = (command.guild_id, command.member.as_deref()) else {
        return Vec::new();
    };

    // Cache first; the guard cannot be held across an await
    if let Some(guild) = ctx.cache.guild(guild_id) {
        return member
            .roles
            .iter()
            .filter_map(|role_id| guild.roles.get(role_id).map(|role| role.name.clone()))
            .collect();
    }

    match guild_id.roles(&ctx.http).await {
        Ok(roles) => member
            .roles
            .iter()
            .filter_map(|role_id| roles.get(role_id).map(|role| role.name.clone()))
            .collect(),
        Err(e) => {
            tracing::warn!("Failed to fetch roles for guild {}: {:?}", guild_id, e);
            Vec::new()
        }
    }
}
