use super::*;

/// Tests creating a new link.
///
/// Expected: Ok with all link fields stored
#[tokio::test]
async fn creates_new_link() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SteamLink)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SteamLinkRepository::new(db);
    let link = repo.link(123456789, "76561198000000000", "verified").await?;

    assert_eq!(link.discord_id, 123456789);
    assert_eq!(link.steam_id, "76561198000000000");
    assert_eq!(link.verification_code, "verified");

    Ok(())
}

/// Tests relinking a different Steam account.
///
/// Verifies that linking again replaces the previous Steam ID instead of
/// failing on the existing row.
///
/// Expected: Ok with the new Steam ID stored
#[tokio::test]
async fn replaces_existing_link() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SteamLink)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SteamLinkRepository::new(db);
    repo.link(123456789, "76561198000000000", "verified").await?;

    let link = repo.link(123456789, "76561198111111111", "verified").await?;

    assert_eq!(link.steam_id, "76561198111111111");

    Ok(())
}
