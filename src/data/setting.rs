//! Economy setting data repository for database operations.
//!
//! Settings are stored as JSON-encoded text under string keys. Absent keys mean
//! "use the default"; the repository never invents values.

use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait};
use serde_json::Value;

use crate::error::AppError;

/// Repository providing database operations for economy settings.
pub struct EconomySettingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EconomySettingRepository<'a> {
    /// Creates a new EconomySettingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `EconomySettingRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches a setting value by key.
    ///
    /// A row whose value fails to parse as JSON is treated as absent (with a
    /// warning) so one corrupt row degrades to the default instead of failing
    /// the whole configuration reload.
    ///
    /// # Arguments
    /// - `key` - Setting key
    ///
    /// # Returns
    /// - `Ok(Some(Value))` - Stored JSON value
    /// - `Ok(None)` - Key absent or value malformed
    /// - `Err(AppError)` - Database error during query
    pub async fn get(&self, key: &str) -> Result<Option<Value>, AppError> {
        let entity = entity::prelude::EconomySetting::find_by_id(key.to_string())
            .one(self.db)
            .await?;

        let Some(row) = entity else {
            return Ok(None);
        };

        match serde_json::from_str(&row.value) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!("Malformed economy setting '{}', ignoring: {}", key, e);
                Ok(None)
            }
        }
    }

    /// Stores a setting value under a key, replacing any previous value.
    ///
    /// # Arguments
    /// - `key` - Setting key
    /// - `value` - JSON value to encode and store
    ///
    /// # Returns
    /// - `Ok(())` - Value stored
    /// - `Err(AppError)` - Database error during upsert
    pub async fn set(&self, key: &str, value: &Value) -> Result<(), AppError> {
        entity::prelude::EconomySetting::insert(entity::economy_setting::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value.to_string()),
        })
        .on_conflict(
            OnConflict::column(entity::economy_setting::Column::Key)
                .update_column(entity::economy_setting::Column::Value)
                .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }
}
