//! Blacklist service for administrator email management.

use sea_orm::{ConnectionTrait, DbErr, SqlErr, TransactionSession, TransactionTrait};

use crate::{
    data::blacklist::BlacklistRepository,
    error::{registration::RegistrationError, AppError},
    model::registration::normalize_email,
};

pub struct BlacklistService<'a, C> {
    db: &'a C,
}

impl<'a, C> BlacklistService<'a, C>
where
    C: ConnectionTrait + TransactionTrait,
{
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Blacklists every email in `emails`.
    ///
    /// The batch is all-or-nothing: if any email is already blacklisted, or appears twice
    /// in the batch, nothing is inserted.
    ///
    /// # Returns
    /// - `Ok(())` - All emails added (also for an empty batch)
    /// - `Err(RegistrationError::BlacklistConflict)` - An email was already present
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add(&self, emails: &[String]) -> Result<(), AppError> {
        let emails = normalize_all(emails);

        let txn = self.db.begin().await?;

        let inserted = BlacklistRepository::new(&txn).insert_many(&emails).await;

        if let Err(err) = inserted {
            txn.rollback().await?;

            if is_unique_violation(&err) {
                tracing::warn!("Blacklist add refused, entry already present: {}", err);
                return Err(RegistrationError::BlacklistConflict.into());
            }

            return Err(err.into());
        }

        txn.commit().await?;

        tracing::info!("Blacklisted {}", emails.join(", "));

        Ok(())
    }

    /// Removes every email in `emails` from the blacklist.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of entries removed, at least one
    /// - `Err(RegistrationError::BlacklistNotFound)` - None of the emails were blacklisted
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn remove(&self, emails: &[String]) -> Result<u64, AppError> {
        let emails = normalize_all(emails);

        let removed = BlacklistRepository::new(self.db)
            .delete_many(&emails)
            .await?;

        if removed == 0 {
            return Err(RegistrationError::BlacklistNotFound.into());
        }

        tracing::info!("Removed {} blacklist entries: {}", removed, emails.join(", "));

        Ok(removed)
    }

    pub async fn contains(&self, email: &str) -> Result<bool, AppError> {
        Ok(BlacklistRepository::new(self.db)
            .contains(&normalize_email(email))
            .await?)
    }

    /// All blacklisted emails, sorted ascending.
    pub async fn list(&self) -> Result<Vec<String>, AppError> {
        Ok(BlacklistRepository::new(self.db).get_all().await?)
    }
}

fn normalize_all(emails: &[String]) -> Vec<String> {
    emails.iter().map(|email| normalize_email(email)).collect()
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
