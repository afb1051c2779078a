use super::*;
use sea_orm::{ActiveModelTrait, ActiveValue};

/// Tests fetching an absent key.
///
/// Expected: Ok(None) so the caller applies its default
#[tokio::test]
async fn returns_none_for_absent_key() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EconomySetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EconomySettingRepository::new(db);
    let value = repo.get("currency_name").await?;

    assert!(value.is_none());

    Ok(())
}

/// Tests fetching a stored structured value.
///
/// Expected: Ok(Some) with the decoded JSON object
#[tokio::test]
async fn decodes_stored_json() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EconomySetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    test_utils::factory::set_setting(db, "role_bonuses", serde_json::json!({"VIP": 10}))
        .await
        .unwrap();

    let repo = EconomySettingRepository::new(db);
    let value = repo.get("role_bonuses").await?;

    assert_eq!(value, Some(serde_json::json!({"VIP": 10})));

    Ok(())
}

/// Tests fetching a row whose value is not valid JSON.
///
/// Verifies that a corrupt row is treated as absent instead of failing the
/// whole configuration reload.
///
/// Expected: Ok(None)
#[tokio::test]
async fn treats_malformed_value_as_absent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EconomySetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    entity::economy_setting::ActiveModel {
        key: ActiveValue::Set("daily_reward".to_string()),
        value: ActiveValue::Set("not json at all {".to_string()),
    }
    .insert(db)
    .await
    .unwrap();

    let repo = EconomySettingRepository::new(db);
    let value = repo.get("daily_reward").await?;

    assert!(value.is_none());

    Ok(())
}
