use super::*;

/// Tests renaming an existing player.
///
/// Expected: Ok with stored name replaced and balance untouched
#[tokio::test]
async fn renames_existing_player() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::create_player_with_points(db, "123456789", 77)
        .await
        .unwrap();

    let repo = PlayerRepository::new(db);
    repo.update_name(123456789, "FreshName").await?;

    let player = repo.get_or_create(123456789, "FreshName").await?;
    assert_eq!(player.name, "FreshName");
    assert_eq!(player.points, 77);

    Ok(())
}

/// Tests that updating a missing player is a no-op.
///
/// Expected: Ok without creating a record
#[tokio::test]
async fn ignores_missing_player() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    repo.update_name(123456789, "Ghost").await?;

    let top = repo.get_top(10).await?;
    assert!(top.is_empty());

    Ok(())
}
