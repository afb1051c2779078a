//! Discord bot integration for the economy command surface.
//!
//! This module provides the Discord bot functionality for the application: the
//! gateway event handler, client startup, and the slash command registry. The
//! command surface is statically declared — every command module is listed in
//! `commands::registrations()` at compile time, registered globally on `ready`,
//! and dispatched by name from `interaction_create`.
//!
//! # Gateway Intents
//!
//! The bot only needs the `GUILDS` intent; slash command interactions arrive
//! regardless of message-related intents.

pub mod commands;
pub mod handler;
pub mod start;

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;

use crate::service::economy::EconomyEngine;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub engine: Arc<EconomyEngine>,
    pub activity: Option<String>,
}

impl Handler {
    pub fn new(db: DatabaseConnection, engine: Arc<EconomyEngine>, activity: Option<String>) -> Self {
        Self {
            db,
            engine,
            activity,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        handler::ready::handle_ready(ctx, ready, self.activity.as_deref()).await;
    }

    /// Called for every interaction; slash commands are dispatched from here
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        handler::interaction::handle_interaction_create(self, ctx, interaction).await;
    }
}
