//! Interaction event handler and error boundary.
//!
//! Slash commands are dispatched by name to the static command registry. This
//! is also the error boundary for the command surface: economy domain errors
//! are rendered by the commands themselves, so anything that reaches this
//! handler is unexpected — it is logged with full details server-side while
//! the user only sees a generic failure message.

use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    Interaction,
};

use crate::bot::{commands, Handler};

/// Handles an incoming interaction, dispatching slash commands.
///
/// # Arguments
/// - `handler` - Bot handler holding the database connection and engine
/// - `ctx` - Discord context
/// - `interaction` - The incoming interaction
pub async fn handle_interaction_create(handler: &Handler, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    tracing::debug!(
        "Received /{} from {} ({})",
        command.data.name,
        command.user.name,
        command.user.id
    );

    if let Err(e) = commands::dispatch(handler, &ctx, &command).await {
        tracing::error!("Command /{} failed: {:?}", command.data.name, e);
        respond_generic_failure(&ctx, &command).await;
    }
}

/// Sends an opaque failure reply, never exposing internal error details.
async fn respond_generic_failure(ctx: &Context, command: &CommandInteraction) {
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content("Something went wrong while handling that command. Please try again later.")
            .ephemeral(true),
    );

    // Fails if the command already sent its response; nothing more to do then
    if let Err(e) = command.create_response(&ctx.http, response).await {
        tracing::debug!("Could not deliver failure response: {:?}", e);
    }
}
