use super::*;

/// Tests removing blacklisted emails.
///
/// Expected: Ok with the removed count and the emails no longer blacklisted
#[tokio::test]
async fn removes_emails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_blacklist_entry(db, "a@gmail.com").await?;
    create_blacklist_entry(db, "b@gmail.com").await?;

    let service = BlacklistService::new(db);
    let removed = service
        .remove(&emails(&["A@gmail.com", "unknown@gmail.com"]))
        .await?;

    assert_eq!(removed, 1);
    assert!(!service.contains("a@gmail.com").await?);
    assert!(service.contains("b@gmail.com").await?);

    Ok(())
}

/// Tests removing emails none of which are blacklisted.
///
/// Expected: Err(BlacklistNotFound)
#[tokio::test]
async fn reports_nothing_removed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BlacklistService::new(db);
    let result = service.remove(&emails(&["unknown@gmail.com"])).await;

    assert!(matches!(
        result,
        Err(AppError::RegistrationErr(RegistrationError::BlacklistNotFound))
    ));

    Ok(())
}
