use super::*;

/// Tests setting a balance for a player with no existing record.
///
/// Verifies that set_points creates the record when it does not exist.
///
/// Expected: Ok with record created at the given balance
#[tokio::test]
async fn creates_record_when_missing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let player = repo.set_points(123456789, "TestPlayer", 42).await?;

    assert_eq!(player.discord_id, 123456789);
    assert_eq!(player.points, 42);

    Ok(())
}

/// Tests overwriting an existing balance.
///
/// Verifies that set_points replaces the stored balance and display name
/// for an existing record.
///
/// Expected: Ok with balance and name replaced
#[tokio::test]
async fn overwrites_existing_balance() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::create_player_with_points(db, "123456789", 10)
        .await
        .unwrap();

    let repo = PlayerRepository::new(db);
    let player = repo.set_points(123456789, "Renamed", 99).await?;

    assert_eq!(player.points, 99);
    assert_eq!(player.name, "Renamed");

    Ok(())
}
