//! Invite count domain model.

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// Invite usage count for a Discord user.
///
/// Rows are written by the invite tracker; this application only reads them
/// for the invite leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invite {
    /// Discord ID of the inviter.
    pub discord_id: u64,
    /// Display name of the inviter.
    pub name: String,
    /// Number of joins attributed to this inviter.
    pub uses: i32,
}

impl Invite {
    /// Converts an entity model to an invite domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Invite)` - The converted invite domain model
    /// - `Err(AppError::InternalError)` - Failed to convert the stored Discord ID
    ///   from String to u64
    pub fn from_entity(entity: entity::invite::Model) -> Result<Self, AppError> {
        let discord_id = parse_u64_from_string(entity.discord_id)?;

        Ok(Self {
            discord_id,
            name: entity.name,
            uses: entity.uses,
        })
    }
}
