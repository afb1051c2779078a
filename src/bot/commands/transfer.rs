//! `/transfer` - send points to another user.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, ResolvedValue,
};

use crate::{
    bot::commands::{invoker_name, respond_embed, respond_text, EMBED_COLOUR},
    bot::Handler,
    error::{economy::EconomyError, AppError},
    model::player::TransferParam,
    service::points::PointsService,
};

pub const NAME: &str = "transfer";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Transfer points to another user.")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::User,
                "recipient",
                "Member receiving the points",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "amount", "Amount to send")
                .required(true),
        )
}

pub async fn run(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let currency = handler.engine.config().currency_name.clone();

    let mut recipient = None;
    let mut amount = None;

    for option in command.data.options() {
        match (option.name, option.value) {
            ("recipient", ResolvedValue::User(user, member)) => {
                let name = member
                    .and_then(|m| m.nick.clone())
                    .unwrap_or_else(|| user.display_name().to_string());
                recipient = Some((user.id.get(), name));
            }
            ("amount", ResolvedValue::Integer(value)) => amount = Some(value),
            _ => {}
        }
    }

    let (Some((recipient_id, recipient_name)), Some(amount)) = (recipient, amount) else {
        return respond_text(ctx, command, "Missing recipient or amount.", true).await;
    };

    if amount < 1 {
        return respond_text(
            ctx,
            command,
            format!("You have to transfer at least 1 {}.", currency),
            true,
        )
        .await;
    }

    let sender_id = command.user.id.get();
    if recipient_id == sender_id {
        return respond_text(
            ctx,
            command,
            format!("You can't transfer {} to yourself.", currency),
            true,
        )
        .await;
    }

    let result = PointsService::new(&handler.db)
        .transfer(TransferParam {
            sender_id,
            sender_name: invoker_name(command),
            recipient_id,
            recipient_name: recipient_name.clone(),
            amount,
        })
        .await;

    match result {
        Ok(()) => {
            let embed = CreateEmbed::new()
                .title(format!("{} Transfer", currency))
                .description(format!(
                    "Transferred {} {} to {}.",
                    amount, currency, recipient_name
                ))
                .colour(EMBED_COLOUR);

            respond_embed(ctx, command, embed, true).await
        }
        Err(AppError::EconomyErr(EconomyError::InsufficientFunds { .. })) => {
            respond_text(
                ctx,
                command,
                format!("You do not have enough {} to transfer.", currency),
                true,
            )
            .await
        }
        Err(e) => Err(e),
    }
}
