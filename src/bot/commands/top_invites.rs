//! `/topinvites` - top invite counts.

use serenity::all::{CommandInteraction, Context, CreateCommand, CreateEmbed};

use crate::{
    bot::commands::{respond_embed, EMBED_COLOUR},
    bot::Handler,
    error::AppError,
    service::points::PointsService,
};

pub const NAME: &str = "topinvites";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Display the top invite leaderboard.")
}

pub async fn run(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let top = PointsService::new(&handler.db).top_invites().await?;

    let mut embed = CreateEmbed::new().title("Top Invites").colour(EMBED_COLOUR);

    if top.is_empty() {
        embed = embed.description("No invite data available.");
    } else {
        for (i, invite) in top.iter().enumerate() {
            embed = embed.field(
                format!("{}. {}", i + 1, invite.name),
                format!("{} invites", invite.uses),
                false,
            );
        }
    }

    respond_embed(ctx, command, embed, false).await
}
