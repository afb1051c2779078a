use super::*;

/// Tests a set-then-get round trip.
///
/// Expected: Ok with the stored value read back unchanged
#[tokio::test]
async fn round_trips_value() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EconomySetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EconomySettingRepository::new(db);
    repo.set("daily_reward", &serde_json::json!(250)).await?;

    let value = repo.get("daily_reward").await?;
    assert_eq!(value, Some(serde_json::json!(250)));

    Ok(())
}

/// Tests overwriting an existing key.
///
/// Expected: Ok with the latest value winning
#[tokio::test]
async fn replaces_existing_value() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EconomySetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EconomySettingRepository::new(db);
    repo.set("currency_name", &serde_json::json!("coins")).await?;
    repo.set("currency_name", &serde_json::json!("gems")).await?;

    let value = repo.get("currency_name").await?;
    assert_eq!(value, Some(serde_json::json!("gems")));

    Ok(())
}
