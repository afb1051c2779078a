//! Steam link data repository for database operations.
//!
//! This module provides the `SteamLinkRepository` for managing linked Steam accounts.

use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait};

use crate::{error::AppError, model::steam_link::SteamLink};

/// Repository providing database operations for linked Steam accounts.
pub struct SteamLinkRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SteamLinkRepository<'a> {
    /// Creates a new SteamLinkRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SteamLinkRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the Steam ID linked to a Discord user, if any.
    ///
    /// # Arguments
    /// - `discord_id` - Discord user ID as u64
    ///
    /// # Returns
    /// - `Ok(Some(String))` - Linked Steam ID
    /// - `Ok(None)` - No link recorded for this user
    /// - `Err(AppError)` - Database error during query
    pub async fn find_steam_id(&self, discord_id: u64) -> Result<Option<String>, AppError> {
        let entity = entity::prelude::SteamLink::find_by_id(discord_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(|link| link.steam_id))
    }

    /// Links a Steam account to a Discord user, replacing any previous link.
    ///
    /// # Arguments
    /// - `discord_id` - Discord user ID as u64
    /// - `steam_id` - Steam ID to link
    /// - `verification_code` - Verification state to record with the link
    ///
    /// # Returns
    /// - `Ok(SteamLink)` - The created or updated link
    /// - `Err(AppError)` - Database error during upsert
    pub async fn link(
        &self,
        discord_id: u64,
        steam_id: &str,
        verification_code: &str,
    ) -> Result<SteamLink, AppError> {
        let entity = entity::prelude::SteamLink::insert(entity::steam_link::ActiveModel {
            discord_id: ActiveValue::Set(discord_id.to_string()),
            steam_id: ActiveValue::Set(steam_id.to_string()),
            verification_code: ActiveValue::Set(verification_code.to_string()),
        })
        .on_conflict(
            OnConflict::column(entity::steam_link::Column::DiscordId)
                .update_columns([
                    entity::steam_link::Column::SteamId,
                    entity::steam_link::Column::VerificationCode,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        SteamLink::from_entity(entity)
    }
}
