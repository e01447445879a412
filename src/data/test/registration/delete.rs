use super::*;

/// Tests deleting the row owned by a Discord ID.
///
/// Expected: Ok with one row deleted and other rows kept
#[tokio::test]
async fn deletes_matching_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    RegistrationFactory::new(db).discord_id("30").build().await?;
    RegistrationFactory::new(db).discord_id("31").build().await?;

    let repo = RegistrationRepository::new(db);
    let deleted = repo.delete(&RecordFilter::by_discord_id(30)).await?;

    assert_eq!(deleted, 1);
    assert!(!repo.exists(&RecordFilter::by_discord_id(30)).await?);
    assert!(repo.exists(&RecordFilter::by_discord_id(31)).await?);

    Ok(())
}

/// Tests deleting with a filter that matches nothing.
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
    let deleted = repo.delete(&RecordFilter::by_email("none@gmail.com")).await?;

    assert_eq!(deleted, 0);

    Ok(())
}

/// Tests that an empty filter is refused instead of deleting every row.
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
    let result = repo.delete(&RecordFilter::new()).await;

    assert!(matches!(
        result,
        Err(AppError::InternalErr(InternalError::EmptyFilter(_)))
    ));
    assert_eq!(repo.find(&RecordFilter::new()).await?.len(), 1);

    Ok(())
}
