//! Points service for balance business logic.
//!
//! This module provides the `PointsService` for balance queries, reward grants,
//! and transfers between players. It orchestrates the player, steam link, and
//! invite repositories while working with domain models.

use sea_orm::DatabaseConnection;

use crate::{
    data::{invite::InviteRepository, player::PlayerRepository, steam_link::SteamLinkRepository},
    error::{economy::EconomyError, AppError},
    model::{invite::Invite, player::Player, player::TransferParam},
};

/// Number of entries shown on the balance and invite leaderboards.
pub const LEADERBOARD_SIZE: u64 = 10;

/// Service providing business logic for player balances.
pub struct PointsService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> PointsService<'a> {
    /// Creates a new PointsService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PointsService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches a player's balance, creating a zero-balance record on first access.
    ///
    /// # Arguments
    /// - `discord_id` - Discord user ID
    /// - `name` - Current display name
    ///
    /// # Returns
    /// - `Ok(Player)` - The player's current record
    /// - `Err(AppError)` - Database error
    pub async fn balance(&self, discord_id: u64, name: &str) -> Result<Player, AppError> {
        let players = PlayerRepository::new(self.db);

        players.get_or_create(discord_id, name).await
    }

    /// Adds earned points to a player's balance.
    ///
    /// Reads the current balance and writes the incremented value. Used by the
    /// reward commands after the engine has computed the amount.
    ///
    /// # Arguments
    /// - `discord_id` - Discord user ID
    /// - `name` - Current display name
    /// - `amount` - Points to add
    ///
    /// # Returns
    /// - `Ok(Player)` - The player's record after the grant
    /// - `Err(AppError)` - Database error
    pub async fn grant(
        &self,
        discord_id: u64,
        name: &str,
        amount: i64,
    ) -> Result<Player, AppError> {
        let players = PlayerRepository::new(self.db);

        let player = players.get_or_create(discord_id, name).await?;

        players
            .set_points(discord_id, name, player.points + amount)
            .await
    }

    /// Moves points from one player to another.
    ///
    /// Fails with `InsufficientFunds` when the amount exceeds the sender's
    /// balance, leaving both balances unchanged. Transferring the exact balance
    /// leaves the sender at zero. Callers must reject self-transfers and
    /// non-positive amounts before building the param.
    ///
    /// # Arguments
    /// - `param` - Sender, recipient, and amount
    ///
    /// # Returns
    /// - `Ok(())` - Points moved
    /// - `Err(AppError::EconomyErr(InsufficientFunds))` - Sender balance too low
    /// - `Err(AppError)` - Database error
    pub async fn transfer(&self, param: TransferParam) -> Result<(), AppError> {
        let players = PlayerRepository::new(self.db);

        let sender = players
            .get_or_create(param.sender_id, &param.sender_name)
            .await?;
        let recipient = players
            .get_or_create(param.recipient_id, &param.recipient_name)
            .await?;

        if sender.points < param.amount {
            return Err(EconomyError::InsufficientFunds {
                balance: sender.points,
                requested: param.amount,
            }
            .into());
        }

        players
            .set_points(sender.discord_id, &sender.name, sender.points - param.amount)
            .await?;
        players
            .set_points(
                recipient.discord_id,
                &recipient.name,
                recipient.points + param.amount,
            )
            .await?;

        Ok(())
    }

    /// Returns the top balances for the leaderboard.
    ///
    /// # Returns
    /// - `Ok(Vec<Player>)` - Players in descending balance order
    /// - `Err(AppError)` - Database error
    pub async fn leaderboard(&self) -> Result<Vec<Player>, AppError> {
        let players = PlayerRepository::new(self.db);

        players.get_top(LEADERBOARD_SIZE).await
    }

    /// Returns the top invite counts for the invite leaderboard.
    ///
    /// # Returns
    /// - `Ok(Vec<Invite>)` - Invite records in descending use order
    /// - `Err(AppError)` - Database error
    pub async fn top_invites(&self) -> Result<Vec<Invite>, AppError> {
        let invites = InviteRepository::new(self.db);

        invites.get_top(LEADERBOARD_SIZE).await
    }

    /// Fetches a player's profile: balance plus linked Steam ID, if any.
    ///
    /// # Arguments
    /// - `discord_id` - Discord user ID
    /// - `name` - Current display name
    ///
    /// # Returns
    /// - `Ok((Player, Option<String>))` - Balance record and optional Steam ID
    /// - `Err(AppError)` - Database error
    pub async fn profile(
        &self,
        discord_id: u64,
        name: &str,
    ) -> Result<(Player, Option<String>), AppError> {
        let players = PlayerRepository::new(self.db);
        let steam_links = SteamLinkRepository::new(self.db);

        let player = players.get_or_create(discord_id, name).await?;
        let steam_id = steam_links.find_steam_id(discord_id).await?;

        Ok((player, steam_id))
    }

    /// Links a Steam account and refreshes the stored display name.
    ///
    /// The verification code is recorded as "verified"; interactive Steam
    /// verification is handled elsewhere.
    ///
    /// # Arguments
    /// - `discord_id` - Discord user ID
    /// - `name` - Current display name
    /// - `steam_id` - Steam ID to link
    ///
    /// # Returns
    /// - `Ok(())` - Link stored and name refreshed
    /// - `Err(AppError)` - Database error
    pub async fn link_steam(
        &self,
        discord_id: u64,
        name: &str,
        steam_id: &str,
    ) -> Result<(), AppError> {
        let steam_links = SteamLinkRepository::new(self.db);
        let players = PlayerRepository::new(self.db);

        steam_links.link(discord_id, steam_id, "verified").await?;
        players.update_name(discord_id, name).await?;

        Ok(())
    }
}
