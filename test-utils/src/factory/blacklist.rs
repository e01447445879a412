//! Blacklist factory for creating test blacklist entries.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a single email into the blacklist table.
///
/// # Arguments
/// - `db` - Database connection
/// - `email` - Address to bar from registration
///
/// # Returns
/// - `Ok(entity::blacklist::Model)` - Created blacklist entry
/// - `Err(DbErr)` - Database error during insert, including duplicate emails
pub async fn create_blacklist_entry(
    db: &DatabaseConnection,
    email: impl Into<String>,
) -> Result<entity::blacklist::Model, DbErr> {
    entity::blacklist::ActiveModel {
        email: ActiveValue::Set(email.into()),
    }
    .insert(db)
    .await
}
