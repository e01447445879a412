use super::*;

/// Tests membership checks.
///
/// Expected: Ok with true only for blacklisted emails
#[tokio::test]
async fn reports_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Blacklist)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_blacklist_entry(db, "bad@gmail.com").await?;

    let repo = BlacklistRepository::new(db);

    assert!(repo.contains("bad@gmail.com").await?);
    assert!(!repo.contains("good@gmail.com").await?);

    Ok(())
}
