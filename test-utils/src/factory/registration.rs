//! Registration factory for creating test registration rows.
//!
//! Defaults produce a `pending` row with a unique Discord ID, email and token so that
//! several rows can be created in one test without tripping the unique indexes.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::registration::RegistrationStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test registrations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::registration::RegistrationFactory;
///
/// let row = RegistrationFactory::new(&db)
///     .discord_id("123456789")
///     .email("someone@gmail.com")
///     .token("known-token")
///     .build()
///     .await?;
/// ```
pub struct RegistrationFactory<'a> {
    db: &'a DatabaseConnection,
    discord_id: String,
    email: String,
    token: String,
    role_kind: String,
    status: RegistrationStatus,
}

impl<'a> RegistrationFactory<'a> {
    /// Creates a new RegistrationFactory with default values.
    ///
    /// Defaults:
    /// - discord_id: `"{id}"` where id is auto-incremented
    /// - email: `"user{id}@gmail.com"`
    /// - token: `"token{id}"`
    /// - role_kind: `"Registered1"`
    /// - status: `Pending`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the row
    ///
    /// # Returns
    /// - `RegistrationFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            discord_id: id.to_string(),
            email: format!("user{}@gmail.com", id),
            token: format!("token{}", id),
            role_kind: "Registered1".to_string(),
            status: RegistrationStatus::Pending,
        }
    }

    /// Sets the Discord ID for the registration.
    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    /// Sets the email for the registration.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the token for the registration.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Sets the requested role kind for the registration.
    pub fn role_kind(mut self, role_kind: impl Into<String>) -> Self {
        self.role_kind = role_kind.into();
        self
    }

    /// Sets the status for the registration.
    pub fn status(mut self, status: RegistrationStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the registration row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::registration::Model)` - Created registration row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::registration::Model, DbErr> {
        entity::registration::ActiveModel {
            discord_id: ActiveValue::Set(self.discord_id),
            email: ActiveValue::Set(self.email),
            token: ActiveValue::Set(self.token),
            submitted_at: ActiveValue::Set(Utc::now()),
            role_kind: ActiveValue::Set(self.role_kind),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending registration with default values.
///
/// Shorthand for `RegistrationFactory::new(db).build().await`.
pub async fn create_pending(db: &DatabaseConnection) -> Result<entity::registration::Model, DbErr> {
    RegistrationFactory::new(db).build().await
}

/// Creates a registered (validated) registration with default values.
///
/// Shorthand for `RegistrationFactory::new(db).status(RegistrationStatus::Registered)`.
pub async fn create_registered(
    db: &DatabaseConnection,
) -> Result<entity::registration::Model, DbErr> {
    RegistrationFactory::new(db)
        .status(RegistrationStatus::Registered)
        .build()
        .await
}
