//! `/leaderboard` - top balances.

use serenity::all::{CommandInteraction, Context, CreateCommand, CreateEmbed};

use crate::{
    bot::commands::{respond_embed, EMBED_COLOUR},
    bot::Handler,
    error::AppError,
    service::points::PointsService,
};

pub const NAME: &str = "leaderboard";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Display the top points leaderboard.")
}

pub async fn run(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let top = PointsService::new(&handler.db).leaderboard().await?;
    let config = handler.engine.config();
    let currency = &config.currency_name;

    let mut embed = CreateEmbed::new()
        .title(format!("Top {}", currency))
        .colour(EMBED_COLOUR);

    for (i, player) in top.iter().enumerate() {
        embed = embed.field(
            format!("{}. {}", i + 1, player.name),
            format!("{} {}", player.points, currency),
            false,
        );
    }

    respond_embed(ctx, command, embed, false).await
}
