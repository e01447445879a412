use super::*;

/// Tests existence checks by Discord ID and by email.
///
/// Expected: Ok with true for stored identities and false otherwise
#[tokio::test]
async fn reports_existing_and_missing_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    RegistrationFactory::new(db)
        .discord_id("11")
        .email("eleven@gmail.com")
        .build()
        .await?;

    let repo = RegistrationRepository::new(db);

    assert!(repo.exists(&RecordFilter::by_discord_id(11)).await?);
    assert!(repo.exists(&RecordFilter::by_email("eleven@gmail.com")).await?);
    assert!(!repo.exists(&RecordFilter::by_discord_id(12)).await?);
    assert!(
        !repo
            .exists(&RecordFilter::by_discord_id(11).email("other@gmail.com"))
            .await?
    );

    Ok(())
}
