use super::*;

/// Tests leaderboard ordering.
///
/// Verifies that players come back in descending balance order.
///
/// Expected: Ok with highest balance first
#[tokio::test]
async fn orders_by_balance_descending() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::create_player_with_points(db, "1", 50)
        .await
        .unwrap();
    factory::player::create_player_with_points(db, "2", 500)
        .await
        .unwrap();
    factory::player::create_player_with_points(db, "3", 5)
        .await
        .unwrap();

    let repo = PlayerRepository::new(db);
    let top = repo.get_top(10).await?;

    let points: Vec<i64> = top.iter().map(|p| p.points).collect();
    assert_eq!(points, vec![500, 50, 5]);

    Ok(())
}

/// Tests that the limit caps the result size.
///
/// Expected: Ok with only the requested number of players
#[tokio::test]
async fn respects_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for i in 0..5 {
        factory::player::create_player_with_points(db, i.to_string(), i * 10)
            .await
            .unwrap();
    }

    let repo = PlayerRepository::new(db);
    let top = repo.get_top(3).await?;

    assert_eq!(top.len(), 3);

    Ok(())
}

/// Tests the empty leaderboard.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_when_no_players() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let top = repo.get_top(10).await?;

    assert!(top.is_empty());

    Ok(())
}
