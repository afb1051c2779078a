//! `/economyinfo` - current economy parameters.

use serenity::all::{CommandInteraction, Context, CreateCommand, CreateEmbed};

use crate::{
    bot::commands::{respond_embed, EMBED_COLOUR},
    bot::Handler,
    error::AppError,
    util::format::format_cooldown,
};

pub const NAME: &str = "economyinfo";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Display economy information.")
}

pub async fn run(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let config = handler.engine.config();

    let embed = CreateEmbed::new()
        .title("Economy Information")
        .field("Currency", config.currency_name.clone(), false)
        .field(
            "Work Reward",
            format!(
                "{}-{} {}",
                config.work_min, config.work_max, config.currency_name
            ),
            false,
        )
        .field(
            "Work Cooldown",
            format_cooldown(config.work_cooldown_secs),
            false,
        )
        .field(
            "Daily Cooldown",
            format_cooldown(config.daily_cooldown_secs),
            false,
        )
        .colour(EMBED_COLOUR);

    respond_embed(ctx, command, embed, true).await
}
