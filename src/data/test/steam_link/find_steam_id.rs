use super::*;

/// Tests looking up a user with no linked account.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_not_linked() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SteamLink)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SteamLinkRepository::new(db);
    let steam_id = repo.find_steam_id(123456789).await?;

    assert!(steam_id.is_none());

    Ok(())
}

/// Tests looking up a linked account.
///
/// Expected: Ok(Some) with the linked Steam ID
#[tokio::test]
async fn returns_linked_steam_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SteamLink)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SteamLinkRepository::new(db);
    repo.link(123456789, "76561198000000000", "verified").await?;

    let steam_id = repo.find_steam_id(123456789).await?;
    assert_eq!(steam_id.as_deref(), Some("76561198000000000"));

    Ok(())
}
