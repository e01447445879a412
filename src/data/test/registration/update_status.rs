use super::*;

/// Tests flipping a pending row to registered.
///
/// Expected: Ok with one row updated and new status persisted
#[tokio::test]
async fn updates_matching_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    RegistrationFactory::new(db).discord_id("20").build().await?;
    RegistrationFactory::new(db).discord_id("21").build().await?;

    let repo = RegistrationRepository::new(db);
    let updated = repo
        .update_status(&RecordFilter::by_discord_id(20), RegistrationStatus::Registered)
        .await?;

    assert_eq!(updated, 1);
    assert_eq!(
        repo.status(&RecordFilter::by_discord_id(20)).await?,
        Some(RegistrationStatus::Registered)
    );
    assert_eq!(
        repo.status(&RecordFilter::by_discord_id(21)).await?,
        Some(RegistrationStatus::Pending)
    );

    Ok(())
}

/// Tests updating with a filter that matches nothing.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_when_nothing_matches() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RegistrationRepository::new(db);
    let updated = repo
        .update_status(&RecordFilter::by_discord_id(20), RegistrationStatus::Registered)
        .await?;

    assert_eq!(updated, 0);

    Ok(())
}

/// Tests that an empty filter is refused instead of updating every row.
///
/// Expected: Err with InternalError::EmptyFilter and rows untouched
#[tokio::test]
async fn refuses_empty_filter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    RegistrationFactory::new(db).build().await?;

    let repo = RegistrationRepository::new(db);
    let result = repo
        .update_status(&RecordFilter::new(), RegistrationStatus::Registered)
        .await;

    assert!(matches!(
        result,
        Err(AppError::InternalErr(InternalError::EmptyFilter(_)))
    ));
    assert!(
        !repo
            .exists(&RecordFilter::new().status(RegistrationStatus::Registered))
            .await?
    );

    Ok(())
}
