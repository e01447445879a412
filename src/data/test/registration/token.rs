use super::*;

/// Tests reading the token for a Discord ID.
///
/// Expected: Ok with the stored token
#[tokio::test]
async fn returns_token_of_single_match() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    RegistrationFactory::new(db)
        .discord_id("10")
        .token("secret")
        .build()
        .await?;

    let repo = RegistrationRepository::new(db);
    let token = repo.token(&RecordFilter::by_discord_id(10)).await?;

    assert_eq!(token.as_deref(), Some("secret"));

    Ok(())
}

/// Tests reading the token when no row matches.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_absent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RegistrationRepository::new(db);
    let token = repo.token(&RecordFilter::by_discord_id(10)).await?;

    assert!(token.is_none());

    Ok(())
}
