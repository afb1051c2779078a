//! `/setsteam` - link a Steam account.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    ResolvedValue,
};

use crate::{
    bot::commands::{invoker_name, respond_text},
    bot::Handler,
    error::AppError,
    service::points::PointsService,
};

pub const NAME: &str = "setsteam";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Set your own Steam ID.")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "steam_id", "Your Steam ID")
                .required(true),
        )
}

pub async fn run(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let mut steam_id = None;

    for option in command.data.options() {
        if let ("steam_id", ResolvedValue::String(value)) = (option.name, option.value) {
            steam_id = Some(value.to_string());
        }
    }

    let Some(steam_id) = steam_id else {
        return respond_text(ctx, command, "Missing Steam ID.", true).await;
    };

    let name = invoker_name(command);

    PointsService::new(&handler.db)
        .link_steam(command.user.id.get(), &name, &steam_id)
        .await?;

    respond_text(
        ctx,
        command,
        format!("Linked Steam account {} to your account.", steam_id),
        true,
    )
    .await
}
