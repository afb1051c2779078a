//! Invite data repository for database operations.
//!
//! Invite rows are written by the invite tracker; this repository only reads
//! them for the invite leaderboard.

use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, QuerySelect};

use crate::{error::AppError, model::invite::Invite};

/// Repository providing read access to invite counts.
pub struct InviteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InviteRepository<'a> {
    /// Creates a new InviteRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `InviteRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the top inviters ordered by use count, highest first.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of records to return
    ///
    /// # Returns
    /// - `Ok(Vec<Invite>)` - Invite records in descending use order
    /// - `Err(AppError)` - Database error during query
    pub async fn get_top(&self, limit: u64) -> Result<Vec<Invite>, AppError> {
        let entities = entity::prelude::Invite::find()
            .order_by_desc(entity::invite::Column::Uses)
            .limit(limit)
            .all(self.db)
            .await?;

        entities.into_iter().map(Invite::from_entity).collect()
    }
}
