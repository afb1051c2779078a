use super::*;

/// Tests creating a zero-balance record on first access.
///
/// Verifies that fetching an unknown player creates a new record with the
/// provided display name and a balance of zero.
///
/// Expected: Ok with new player at 0 points
#[tokio::test]
async fn creates_zero_balance_on_first_access() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let player = repo.get_or_create(123456789, "TestPlayer").await?;

    assert_eq!(player.discord_id, 123456789);
    assert_eq!(player.name, "TestPlayer");
    assert_eq!(player.points, 0);

    Ok(())
}

/// Tests that an existing balance survives a read.
///
/// Verifies that fetching a player who already has points does not reset
/// the balance to zero.
///
/// Expected: Ok with the seeded balance preserved
#[tokio::test]
async fn preserves_existing_balance() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::create_player_with_points(db, "123456789", 250)
        .await
        .unwrap();

    let repo = PlayerRepository::new(db);
    let player = repo.get_or_create(123456789, "TestPlayer").await?;

    assert_eq!(player.points, 250);

    Ok(())
}

/// Tests that the stored display name refreshes on read.
///
/// Verifies that fetching a player with a new display name updates the stored
/// name while leaving the balance untouched.
///
/// Expected: Ok with updated name and unchanged balance
#[tokio::test]
async fn refreshes_display_name_on_read() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    repo.get_or_create(123456789, "OldName").await?;

    let player = repo.get_or_create(123456789, "NewName").await?;

    assert_eq!(player.name, "NewName");
    assert_eq!(player.points, 0);

    Ok(())
}
