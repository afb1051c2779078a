//! `/daily` - claim the fixed daily reward.

use chrono::Utc;
use serenity::all::{CommandInteraction, Context, CreateCommand, CreateEmbed};

use crate::{
    bot::commands::{invoker_name, member_role_names, respond_embed, respond_text, EMBED_COLOUR},
    bot::Handler,
    error::{economy::EconomyError, AppError},
    service::points::PointsService,
    util::format::format_remaining,
};

pub const NAME: &str = "daily";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Claim your daily points.")
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

    let currency = handler.engine.config().currency_name.clone();

    let claim = match handler.engine.try_daily(user_id, &roles, now) {
        Ok(claim) => claim,
        Err(EconomyError::CooldownActive { remaining }) => {
            return respond_text(
                ctx,
                command,
                format!(
                    "You've already claimed your daily {}. Please wait {}.",
                    currency,
                    format_remaining(remaining)
                ),
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
        .title("Daily Reward")
        .description(format!("Claimed {} {}.", claim.earned_points, currency))
        .colour(EMBED_COLOUR);

    respond_embed(ctx, command, embed, false).await
}
