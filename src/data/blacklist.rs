//! Blacklist data repository for database operations.

use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

/// Repository providing database operations for the email blacklist.
pub struct BlacklistRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BlacklistRepository<'a, C> {
    /// Creates a new BlacklistRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts each email into the blacklist.
    ///
    /// Inserts are issued one by one so the first duplicate stops the batch; run inside a
    /// transaction to make the batch all-or-nothing.
    ///
    /// # Arguments
    /// - `emails` - Normalized emails to insert
    ///
    /// # Returns
    /// - `Ok(())` - Every email inserted
    /// - `Err(DbErr)` - Database error; a duplicate surfaces as
    ///   `SqlErr::UniqueConstraintViolation` through `DbErr::sql_err()`
    pub async fn insert_many(&self, emails: &[String]) -> Result<(), DbErr> {
        for email in emails {
            entity::prelude::Blacklist::insert(entity::blacklist::ActiveModel {
                email: ActiveValue::Set(email.clone()),
            })
            .exec_without_returning(self.db)
            .await?;
        }

        Ok(())
    }

    /// Deletes the given emails from the blacklist.
    ///
    /// # Returns
    /// - `Ok(u64)` - Total number of rows deleted (0 if none of the emails were present)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_many(&self, emails: &[String]) -> Result<u64, DbErr> {
        if emails.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Blacklist::delete_many()
            .filter(entity::blacklist::Column::Email.is_in(emails.iter().cloned()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Checks whether an email is blacklisted.
    pub async fn contains(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Blacklist::find()
            .filter(entity::blacklist::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets every blacklisted email, sorted ascending.
    pub async fn get_all(&self) -> Result<Vec<String>, DbErr> {
        let entries = entity::prelude::Blacklist::find()
            .order_by_asc(entity::blacklist::Column::Email)
            .all(self.db)
            .await?;

        Ok(entries.into_iter().map(|entry| entry.email).collect())
    }
}
