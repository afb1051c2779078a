//! `/balance` - check your own points.

use serenity::all::{CommandInteraction, Context, CreateCommand, CreateEmbed};

use crate::{
    bot::commands::{invoker_name, respond_embed, EMBED_COLOUR},
    bot::Handler,
    error::AppError,
    service::points::PointsService,
};

pub const NAME: &str = "balance";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Check your own points.")
}

pub async fn run(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let name = invoker_name(command);
    let player = PointsService::new(&handler.db)
        .balance(command.user.id.get(), &name)
        .await?;

    let config = handler.engine.config();
    let currency = &config.currency_name;

    let embed = CreateEmbed::new()
        .title(format!("Your {} Balance", currency))
        .description(format!(
            "You have {} {} in your account.",
            player.points, currency
        ))
        .colour(EMBED_COLOUR);

    respond_embed(ctx, command, embed, false).await
}
