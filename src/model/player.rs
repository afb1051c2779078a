//! Player domain models and parameters.
//!
//! Provides the domain model for a player's stored point balance plus the
//! parameter types used when moving points between players.

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// A player's stored point balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Discord ID of the player.
    pub discord_id: u64,
    /// Display name of the player, refreshed on every read.
    pub name: String,
    /// Current point balance.
    pub points: i64,
}

impl Player {
    /// Converts an entity model to a player domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Player)` - The converted player domain model
    /// - `Err(AppError::InternalError)` - Failed to convert the stored Discord ID
    ///   from String to u64
    pub fn from_entity(entity: entity::player::Model) -> Result<Self, AppError> {
        let discord_id = parse_u64_from_string(entity.discord_id)?;

        Ok(Self {
            discord_id,
            name: entity.name,
            points: entity.points,
        })
    }
}

/// Parameters for transferring points from one player to another.
#[derive(Debug, Clone)]
pub struct TransferParam {
    /// Discord ID of the sender.
    pub sender_id: u64,
    /// Display name of the sender.
    pub sender_name: String,
    /// Discord ID of the recipient. Must differ from `sender_id`; the command
    /// layer rejects self-transfers before building this param.
    pub recipient_id: u64,
    /// Display name of the recipient.
    pub recipient_name: String,
    /// Amount of points to move. Must be positive.
    pub amount: i64,
}
