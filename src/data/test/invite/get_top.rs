use super::*;

/// Tests invite leaderboard ordering.
///
/// Expected: Ok with highest use count first
#[tokio::test]
async fn orders_by_uses_descending() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Invite)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    InviteFactory::new(db).uses(3).build().await.unwrap();
    InviteFactory::new(db).uses(12).build().await.unwrap();
    InviteFactory::new(db).uses(7).build().await.unwrap();

    let repo = InviteRepository::new(db);
    let top = repo.get_top(10).await?;

    let uses: Vec<i32> = top.iter().map(|i| i.uses).collect();
    assert_eq!(uses, vec![12, 7, 3]);

    Ok(())
}

/// Tests the empty invite leaderboard.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_when_no_invites() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Invite)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InviteRepository::new(db);
    let top = repo.get_top(10).await?;

    assert!(top.is_empty());

    Ok(())
}
