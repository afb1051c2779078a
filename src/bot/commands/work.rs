//! `/work` - earn points on a short cooldown.

use chrono::Utc;
use serenity::all::{CommandInteraction, Context, CreateCommand, CreateEmbed};

use crate::{
    bot::commands::{invoker_name, member_role_names, respond_embed, respond_text, EMBED_COLOUR},
    bot::Handler,
    error::{economy::EconomyError, AppError},
    service::points::PointsService,
};

pub const NAME: &str = "work";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Earn points by working.")
}

pub async fn run(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let user_id = command.user.id.get();
    let name = invoker_name(command);
    let roles = member_role_names(ctx, command).await;
    let now = Utc::now();

    let claim = match handler.engine.try_work(user_id, &roles, now) {
        Ok(claim) => claim,
        Err(EconomyError::CooldownActive { .. }) => {
            return respond_text(
                ctx,
                command,
                "You're working too fast. Please take a break.",
                true,
            )
            .await;
        }
        Err(e) => return Err(e.into()),
    };

    PointsService::new(&handler.db)
        .grant(user_id, &name, claim.earned_points)
        .await?;

    // Balance persisted; only now does the cooldown start
    claim.ticket.commit(now);

    let embed = CreateEmbed::new()
        .title("Work")
        .description(claim.description)
        .colour(EMBED_COLOUR);

    respond_embed(ctx, command, embed, false).await
}
