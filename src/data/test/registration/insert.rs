use super::*;

/// Tests inserting a new registration.
///
/// Verifies that the repository stores the row as pending with the given identity,
/// email, token and role kind.
///
/// Expected: Ok with pending record returned and persisted
#[tokio::test]
async fn inserts_pending_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RegistrationRepository::new(db);
    let record = repo
        .insert(CreateRecordParam {
            discord_id: 123456789,
            email: "johndoe@gmail.com".to_string(),
            token: "token".to_string(),
            role_kind: "Registered1".to_string(),
        })
        .await?;

    assert_eq!(record.discord_id, 123456789);
    assert_eq!(record.email, "johndoe@gmail.com");
    assert_eq!(record.token, "token");
    assert_eq!(record.role_kind, "Registered1");
    assert_eq!(record.status, RegistrationStatus::Pending);
    assert!(repo.exists(&RecordFilter::by_discord_id(123456789)).await?);

    Ok(())
}

/// Tests inserting a second row for the same Discord ID.
///
/// Verifies that the unique index on `discord_id` rejects the duplicate.
///
/// Expected: Err with database error
#[tokio::test]
async fn rejects_duplicate_discord_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    RegistrationFactory::new(db).discord_id("42").build().await?;

    let repo = RegistrationRepository::new(db);
    let result = repo
        .insert(CreateRecordParam {
            discord_id: 42,
            email: "other@gmail.com".to_string(),
            token: "token".to_string(),
            role_kind: "Registered1".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}

/// Tests inserting a second row for the same email.
///
/// Expected: Err with database error
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    RegistrationFactory::new(db)
        .email("taken@gmail.com")
        .build()
        .await?;

    let repo = RegistrationRepository::new(db);
    let result = repo
        .insert(CreateRecordParam {
            discord_id: 7,
            email: "taken@gmail.com".to_string(),
            token: "token".to_string(),
            role_kind: "Registered1".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
