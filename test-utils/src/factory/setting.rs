//! Setting factory for seeding economy setting rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts an economy setting row with a JSON-encoded value.
///
/// Settings are stored as JSON text, matching what the setting repository expects
/// to read back. Use `serde_json::json!` for the value:
///
/// ```rust,ignore
/// set_setting(&db, "currency_name", serde_json::json!("coins")).await?;
/// set_setting(&db, "role_bonuses", serde_json::json!({"VIP": 10})).await?;
/// ```
///
/// # Arguments
/// - `db` - Database connection
/// - `key` - Setting key
/// - `value` - JSON value to encode and store
///
/// # Returns
/// - `Ok(entity::economy_setting::Model)` - Created setting row
/// - `Err(DbErr)` - Database error during insert
pub async fn set_setting(
    db: &DatabaseConnection,
    key: impl Into<String>,
    value: serde_json::Value,
) -> Result<entity::economy_setting::Model, DbErr> {
    entity::economy_setting::ActiveModel {
        key: ActiveValue::Set(key.into()),
        value: ActiveValue::Set(value.to_string()),
    }
    .insert(db)
    .await
}
