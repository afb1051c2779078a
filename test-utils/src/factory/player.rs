//! Player factory for creating test player entities.
//!
//! This module provides factory methods for creating player balance entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test players with customizable fields.
///
/// Provides a builder pattern for creating player entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::player::PlayerFactory;
///
/// let player = PlayerFactory::new(&db)
///     .discord_id("123456789")
///     .name("CustomPlayer")
///     .points(500)
///     .build()
///     .await?;
/// ```
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    discord_id: String,
    name: String,
    points: i64,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - discord_id: auto-incremented numeric id
    /// - name: `"Player {id}"`
    /// - points: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `PlayerFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            discord_id: id.to_string(),
            name: format!("Player {}", id),
            points: 0,
        }
    }

    /// Sets the Discord ID for the player.
    ///
    /// # Arguments
    /// - `discord_id` - Discord user ID as string
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    /// Sets the display name for the player.
    ///
    /// # Arguments
    /// - `name` - Display name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the point balance for the player.
    ///
    /// # Arguments
    /// - `points` - Point balance
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn points(mut self, points: i64) -> Self {
        self.points = points;
        self
    }

    /// Inserts the player entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::player::Model)` - Created player entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            discord_id: ActiveValue::Set(self.discord_id),
            name: ActiveValue::Set(self.name),
            points: ActiveValue::Set(self.points),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player with default values.
///
/// Shorthand for `PlayerFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::player::Model)` - Created player entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_player(db: &DatabaseConnection) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db).build().await
}

/// Creates a player with a specific Discord ID and balance.
///
/// Shorthand for the common case of seeding a known balance for a known user.
///
/// # Arguments
/// - `db` - Database connection
/// - `discord_id` - Discord ID as string or number
/// - `points` - Point balance to seed
///
/// # Returns
/// - `Ok(entity::player::Model)` - Created player entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_player_with_points(
    db: &DatabaseConnection,
    discord_id: impl Into<String>,
    points: i64,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db)
        .discord_id(discord_id)
        .points(points)
        .build()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_player_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Player).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let player = create_player(db).await?;

        assert!(!player.discord_id.is_empty());
        assert!(!player.name.is_empty());
        assert_eq!(player.points, 0);

        Ok(())
    }

    #[tokio::test]
    async fn creates_player_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Player).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let player = PlayerFactory::new(db)
            .discord_id("123456789")
            .name("CustomPlayer")
            .points(500)
            .build()
            .await?;

        assert_eq!(player.discord_id, "123456789");
        assert_eq!(player.name, "CustomPlayer");
        assert_eq!(player.points, 500);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_players() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Player).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let player1 = create_player(db).await?;
        let player2 = create_player(db).await?;

        assert_ne!(player1.discord_id, player2.discord_id);
        assert_ne!(player1.name, player2.name);

        Ok(())
    }
}
