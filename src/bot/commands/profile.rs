//! `/profile` - balance and linked accounts in one view.

use serenity::all::{CommandInteraction, Context, CreateCommand, CreateEmbed};

use crate::{
    bot::commands::{invoker_name, respond_embed, EMBED_COLOUR},
    bot::Handler,
    error::AppError,
    service::points::PointsService,
};

pub const NAME: &str = "profile";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Check your profile.")
}

pub async fn run(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let name = invoker_name(command);
    let (player, steam_id) = PointsService::new(&handler.db)
        .profile(command.user.id.get(), &name)
        .await?;

    let config = handler.engine.config();

    let mut embed = CreateEmbed::new()
        .title(format!("{}'s Profile", player.name))
        .thumbnail(command.user.face())
        .field("Discord Username", player.name.clone(), false)
        .field(config.currency_name.clone(), player.points.to_string(), false)
        .colour(EMBED_COLOUR);

    if let Some(steam_id) = steam_id {
        // Spoilered so the ID is opt-in to reveal
        embed = embed.field("Steam ID", format!("||{}||", steam_id), false);
    }

    respond_embed(ctx, command, embed, false).await
}
