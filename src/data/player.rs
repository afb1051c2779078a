//! Player data repository for database operations.
//!
//! This module provides the `PlayerRepository` for managing player balance records in
//! the database. It handles first-access record creation, balance updates, display name
//! refreshes, and leaderboard queries with proper conversion between entity models and
//! domain models at the infrastructure boundary.

use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::{error::AppError, model::player::Player};

/// Repository providing database operations for player balances.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and querying player balance records.
pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    /// Creates a new PlayerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PlayerRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches a player's balance record, creating it on first access.
    ///
    /// New players start at zero points. The stored display name is refreshed on
    /// every access so leaderboards always show current names; the balance of an
    /// existing record is left untouched.
    ///
    /// # Arguments
    /// - `discord_id` - Discord user ID as u64
    /// - `name` - Current display name of the user
    ///
    /// # Returns
    /// - `Ok(Player)` - The existing or newly created player record
    /// - `Err(AppError)` - Database error during upsert
    pub async fn get_or_create(&self, discord_id: u64, name: &str) -> Result<Player, AppError> {
        let entity = entity::prelude::Player::insert(entity::player::ActiveModel {
            discord_id: ActiveValue::Set(discord_id.to_string()),
            name: ActiveValue::Set(name.to_string()),
            points: ActiveValue::Set(0),
        })
        .on_conflict(
            OnConflict::column(entity::player::Column::DiscordId)
                .update_column(entity::player::Column::Name)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Player::from_entity(entity)
    }

    /// Sets a player's balance, creating the record if needed.
    ///
    /// # Arguments
    /// - `discord_id` - Discord user ID as u64
    /// - `name` - Current display name of the user
    /// - `points` - New balance to store
    ///
    /// # Returns
    /// - `Ok(Player)` - The updated player record
    /// - `Err(AppError)` - Database error during upsert
    pub async fn set_points(
        &self,
        discord_id: u64,
        name: &str,
        points: i64,
    ) -> Result<Player, AppError> {
        let entity = entity::prelude::Player::insert(entity::player::ActiveModel {
            discord_id: ActiveValue::Set(discord_id.to_string()),
            name: ActiveValue::Set(name.to_string()),
            points: ActiveValue::Set(points),
        })
        .on_conflict(
            OnConflict::column(entity::player::Column::DiscordId)
                .update_columns([
                    entity::player::Column::Name,
                    entity::player::Column::Points,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Player::from_entity(entity)
    }

    /// Returns the top players ordered by balance, highest first.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of players to return
    ///
    /// # Returns
    /// - `Ok(Vec<Player>)` - Players in descending balance order
    /// - `Err(AppError)` - Database error during query
    pub async fn get_top(&self, limit: u64) -> Result<Vec<Player>, AppError> {
        let entities = entity::prelude::Player::find()
            .order_by_desc(entity::player::Column::Points)
            .limit(limit)
            .all(self.db)
            .await?;

        entities.into_iter().map(Player::from_entity).collect()
    }

    /// Updates the stored display name for a player, if the record exists.
    ///
    /// # Arguments
    /// - `discord_id` - Discord user ID as u64
    /// - `name` - New display name
    ///
    /// # Returns
    /// - `Ok(())` - Name updated (or no matching record found)
    /// - `Err(AppError)` - Database error during update
    pub async fn update_name(&self, discord_id: u64, name: &str) -> Result<(), AppError> {
        entity::prelude::Player::update_many()
            .filter(entity::player::Column::DiscordId.eq(discord_id.to_string()))
            .col_expr(
                entity::player::Column::Name,
                sea_orm::sea_query::Expr::value(name.to_string()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }
}
