use super::*;

/// Tests the add then check round trip.
///
/// Expected: Ok with every added email reported as blacklisted, normalized
#[tokio::test]
async fn adds_emails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BlacklistService::new(db);
    service
        .add(&emails(&["Spam@gmail.com", "junk@gmail.com"]))
        .await?;

    assert!(service.contains("spam@gmail.com").await?);
    assert!(service.contains("JUNK@gmail.com").await?);
    assert_eq!(
        service.list().await?,
        emails(&["junk@gmail.com", "spam@gmail.com"])
    );

    Ok(())
}

/// Tests adding a batch that contains an already blacklisted email.
///
/// Expected: Err(BlacklistConflict) with no email of the batch inserted
#[tokio::test]
async fn refuses_batch_with_existing_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_blacklist_entry(db, "old@gmail.com").await?;

    let service = BlacklistService::new(db);
    let result = service
        .add(&emails(&["new@gmail.com", "old@gmail.com"]))
        .await;

    assert!(matches!(
        result,
        Err(AppError::RegistrationErr(RegistrationError::BlacklistConflict))
    ));
    assert!(!service.contains("new@gmail.com").await?);

    Ok(())
}

/// Tests adding a batch that repeats the same email.
///
/// Expected: Err(BlacklistConflict) with nothing inserted
#[tokio::test]
async fn refuses_batch_with_repeated_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BlacklistService::new(db);
    let result = service
        .add(&emails(&["dup@gmail.com", "DUP@gmail.com"]))
        .await;

    assert!(matches!(
        result,
        Err(AppError::RegistrationErr(RegistrationError::BlacklistConflict))
    ));
    assert!(service.list().await?.is_empty());

    Ok(())
}
