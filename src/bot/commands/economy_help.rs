//! `/economyhelp` - command overview.

use serenity::all::{CommandInteraction, Context, CreateCommand, CreateEmbed};

use crate::{
    bot::commands::{respond_embed, EMBED_COLOUR},
    bot::Handler,
    error::AppError,
};

pub const NAME: &str = "economyhelp";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Display help for the economy commands.")
}

pub async fn run(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let config = handler.engine.config();
    let currency = &config.currency_name;

    let commands_text = format!(
        "/setsteam - Set your own Steam ID.\n\
         /transfer - Transfer {currency} to another user.\n\
         /balance - Check your own {currency}.\n\
         /profile - Check your profile.\n\
         /work - Earn {currency} by working.\n\
         /daily - Claim your daily {currency}.\n\
         /leaderboard - Display the top {currency} leaderboard.\n\
         /topinvites - Display the top invite leaderboard.\n\
         /economyinfo - Display economy information."
    );

    let embed = CreateEmbed::new()
        .title("Economy Help")
        .field("Commands", commands_text, false)
        .colour(EMBED_COLOUR);

    respond_embed(ctx, command, embed, true).await
}
