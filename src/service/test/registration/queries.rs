use super::*;

/// Tests resolving the requested role kind of a user.
///
/// Expected: Ok(Some) for a stored identity, Ok(None) otherwise
#[tokio::test]
async fn resolves_role_for_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::new();
    let pattern = email_pattern();

    RegistrationFactory::new(db)
        .discord_id("100")
        .role_kind("Registered2")
        .build()
        .await?;

    let service = RegistrationService::new(db, &mailer, &pattern);

    assert_eq!(
        service.role_for_user(100).await?.as_deref(),
        Some("Registered2")
    );
    assert_eq!(service.role_for_user(200).await?, None);

    Ok(())
}

/// Tests email validity against the pattern and the blacklist.
///
/// Expected: Ok(true) only for a matching, non-blacklisted email
#[tokio::test]
async fn checks_email_validity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::new();
    let pattern = email_pattern();

    create_blacklist_entry(db, "banned@gmail.com").await?;

    let service = RegistrationService::new(db, &mailer, &pattern);

    assert!(service.is_email_valid("johndoe@gmail.com").await?);
    assert!(!service.is_email_valid("banned@gmail.com").await?);
    assert!(!service.is_email_valid("BANNED@gmail.com").await?);
    assert!(!service.is_email_valid("jd@gmail.com").await?);
    assert!(!service.is_email_valid("johndoe@example.com").await?);

    Ok(())
}
