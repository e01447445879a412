use super::*;

/// Tests reading the status of a single matching row.
///
/// Expected: Ok with the stored status
#[tokio::test]
async fn returns_status_of_single_match() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    RegistrationFactory::new(db)
        .email("a@gmail.com")
        .status(RegistrationStatus::Registered)
        .build()
        .await?;

    let repo = RegistrationRepository::new(db);
    let status = repo.status(&RecordFilter::by_email("a@gmail.com")).await?;

    assert_eq!(status, Some(RegistrationStatus::Registered));

    Ok(())
}

/// Tests reading the status when no row matches.
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
    let status = repo.status(&RecordFilter::by_discord_id(99)).await?;

    assert_eq!(status, None);

    Ok(())
}

/// Tests reading the status when the filter is ambiguous.
///
/// Expected: Ok(None) since no single status applies
#[tokio::test]
async fn returns_none_when_ambiguous() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    RegistrationFactory::new(db).build().await?;
    RegistrationFactory::new(db).build().await?;

    let repo = RegistrationRepository::new(db);
    let status = repo.status(&RecordFilter::new().role_kind("Registered1")).await?;

    assert_eq!(status, None);

    Ok(())
}

/// Tests reading the role kind requested by a user.
///
/// Expected: Ok with the stored role kind
#[tokio::test]
async fn returns_role_kind_of_single_match() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    RegistrationFactory::new(db)
        .discord_id("5")
        .role_kind("Registered2")
        .build()
        .await?;

    let repo = RegistrationRepository::new(db);
    let role_kind = repo.role_kind(&RecordFilter::by_discord_id(5)).await?;

    assert_eq!(role_kind.as_deref(), Some("Registered2"));

    Ok(())
}
