use super::*;
use sea_orm::TransactionTrait;

/// Tests deregistering a registered identity.
///
/// Expected: Ok with the row deleted
#[tokio::test]
async fn deletes_registered_row() -> Result<(), AppError> {
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
        .status(RegistrationStatus::Registered)
        .build()
        .await?;

    let service = RegistrationService::new(db, &mailer, &pattern);
    service.deregister(100).await?;

    assert!(service
        .records(&RecordFilter::by_discord_id(100))
        .await?
        .is_empty());

    Ok(())
}

/// Tests deregistering a pending identity.
///
/// Expected: Err(NotRegistered) with the pending row kept
#[tokio::test]
async fn refuses_pending_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::new();
    let pattern = email_pattern();

    RegistrationFactory::new(db).discord_id("100").build().await?;

    let service = RegistrationService::new(db, &mailer, &pattern);
    let result = service.deregister(100).await;

    assert!(matches!(
        result,
        Err(AppError::RegistrationErr(RegistrationError::NotRegistered {
            discord_id: 100
        }))
    ));
    assert_eq!(
        service
            .records(&RecordFilter::by_discord_id(100))
            .await?
            .len(),
        1
    );

    Ok(())
}

/// Tests deregistering an unknown identity.
///
/// Expected: Err(NotRegistered)
#[tokio::test]
async fn refuses_unknown_identity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::new();
    let pattern = email_pattern();

    let service = RegistrationService::new(db, &mailer, &pattern);
    let result = service.deregister(100).await;

    assert!(matches!(
        result,
        Err(AppError::RegistrationErr(RegistrationError::NotRegistered { .. }))
    ));

    Ok(())
}

/// Tests that deregistering inside a caller's transaction is undone by its rollback.
///
/// Expected: Ok from the service, registered row restored after the outer rollback
#[tokio::test]
async fn rolls_back_inside_caller_transaction() -> Result<(), AppError> {
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
        .status(RegistrationStatus::Registered)
        .build()
        .await?;

    let txn = db.begin().await?;
    RegistrationService::new(&txn, &mailer, &pattern)
        .deregister(100)
        .await?;
    txn.rollback().await?;

    let service = RegistrationService::new(db, &mailer, &pattern);
    let records = service.records(&RecordFilter::by_discord_id(100)).await?;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].status, RegistrationStatus::Registered);

    Ok(())
}
