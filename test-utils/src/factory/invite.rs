//! Invite factory for creating test invite count entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test invite records with customizable fields.
pub struct InviteFactory<'a> {
    db: &'a DatabaseConnection,
    discord_id: String,
    name: String,
    uses: i32,
}

impl<'a> InviteFactory<'a> {
    /// Creates a new InviteFactory with default values.
    ///
    /// Defaults:
    /// - discord_id: auto-incremented numeric id
    /// - name: `"Inviter {id}"`
    /// - uses: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `InviteFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            discord_id: id.to_string(),
            name: format!("Inviter {}", id),
            uses: 0,
        }
    }

    /// Sets the Discord ID for the record.
    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    /// Sets the display name for the record.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the invite use count for the record.
    pub fn uses(mut self, uses: i32) -> Self {
        self.uses = uses;
        self
    }

    /// Inserts the invite entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::invite::Model)` - Created invite entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::invite::Model, DbErr> {
        entity::invite::ActiveModel {
            discord_id: ActiveValue::Set(self.discord_id),
            name: ActiveValue::Set(self.name),
            uses: ActiveValue::Set(self.uses),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an invite record with default values.
///
/// Shorthand for `InviteFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::invite::Model)` - Created invite entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_invite(db: &DatabaseConnection) -> Result<entity::invite::Model, DbErr> {
    InviteFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_invite_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Invite).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let invite = create_invite(db).await?;

        assert!(!invite.discord_id.is_empty());
        assert_eq!(invite.uses, 0);

        Ok(())
    }

    #[tokio::test]
    async fn creates_invite_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Invite).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let invite = InviteFactory::new(db)
            .discord_id("42")
            .name("Recruiter")
            .uses(17)
            .build()
            .await?;

        assert_eq!(invite.discord_id, "42");
        assert_eq!(invite.name, "Recruiter");
        assert_eq!(invite.uses, 17);

        Ok(())
    }
}
