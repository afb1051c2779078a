//! Steam account link domain model.

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// A Steam account linked to a Discord user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SteamLink {
    /// Discord ID of the owning user.
    pub discord_id: u64,
    /// Linked Steam ID.
    pub steam_id: String,
    /// Verification state recorded when the link was made.
    pub verification_code: String,
}

impl SteamLink {
    /// Converts an entity model to a steam link domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(SteamLink)` - The converted domain model
    /// - `Err(AppError::InternalError)` - Failed to convert the stored Discord ID
    ///   from String to u64
    pub fn from_entity(entity: entity::steam_link::Model) -> Result<Self, AppError> {
        let discord_id = parse_u64_from_string(entity.discord_id)?;

        Ok(Self {
            discord_id,
            steam_id: entity.steam_id,
            verification_code: entity.verification_code,
        })
    }
}
