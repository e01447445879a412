//! Registration data repository for database operations.
//!
//! This module provides the `RegistrationRepository`, the persistence gateway behind the
//! registration service. Lookups, status updates and deletes all take a `RecordFilter`
//! template; populated fields are AND-ed into a SeaORM `Condition` with bound values and
//! unset fields are left out of the predicate.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    error::{internal::InternalError, AppError},
    model::registration::{CreateRecordParam, Record, RecordFilter, RegistrationStatus},
};

use entity::registration::Column;

/// Repository providing database operations for registration rows.
pub struct RegistrationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RegistrationRepository<'a, C> {
    /// Creates a new RegistrationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new pending registration stamped with the current time.
    ///
    /// # Arguments
    /// - `param` - Identity, normalized email, token and requested role kind
    ///
    /// # Returns
    /// - `Ok(Record)` - The inserted row
    /// - `Err(AppError::DbErr)` - Database error, including unique index violations on
    ///   `discord_id` or `email`
    pub async fn insert(&self, param: CreateRecordParam) -> Result<Record, AppError> {
        let entity = entity::registration::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id.to_string()),
            email: ActiveValue::Set(param.email),
            token: ActiveValue::Set(param.token),
            submitted_at: ActiveValue::Set(Utc::now()),
            role_kind: ActiveValue::Set(param.role_kind),
            status: ActiveValue::Set(RegistrationStatus::Pending),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Record::from_entity(entity)
    }

    /// Gets every row matching the filter, oldest first.
    ///
    /// An empty filter matches every row.
    pub async fn find(&self, filter: &RecordFilter) -> Result<Vec<Record>, AppError> {
        let entities = entity::prelude::Registration::find()
            .filter(filter_condition(filter))
            .order_by_asc(Column::SubmittedAt)
            .all(self.db)
            .await?;

        entities.into_iter().map(Record::from_entity).collect()
    }

    /// Gets the single row matching the filter.
    ///
    /// # Returns
    /// - `Ok(Some(Record))` - Exactly one row matched
    /// - `Ok(None)` - No row matched
    /// - `Err(AppError::InternalErr(DuplicateIdentity))` - More than one row matched
    pub async fn find_one(&self, filter: &RecordFilter) -> Result<Option<Record>, AppError> {
        let mut records = self.find(filter).await?;

        match records.len() {
            0 | 1 => Ok(records.pop()),
            count => Err(InternalError::DuplicateIdentity {
                identity: format!("{:?}", filter),
                count,
            }
            .into()),
        }
    }

    /// Gets the status of the row matching the filter.
    ///
    /// # Returns
    /// - `Ok(Some(status))` - Exactly one row matched
    /// - `Ok(None)` - Zero or several rows matched
    pub async fn status(&self, filter: &RecordFilter) -> Result<Option<RegistrationStatus>, AppError> {
        Ok(self.single(filter).await?.map(|record| record.status))
    }

    /// Gets the token of the row matching the filter.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - Exactly one row matched
    /// - `Ok(None)` - Zero or several rows matched
    pub async fn token(&self, filter: &RecordFilter) -> Result<Option<String>, AppError> {
        Ok(self.single(filter).await?.map(|record| record.token))
    }

    /// Gets the requested role kind of the row matching the filter.
    ///
    /// # Returns
    /// - `Ok(Some(role_kind))` - Exactly one row matched
    /// - `Ok(None)` - Zero or several rows matched
    pub async fn role_kind(&self, filter: &RecordFilter) -> Result<Option<String>, AppError> {
        Ok(self.single(filter).await?.map(|record| record.role_kind))
    }

    /// Checks whether any row matches the filter.
    pub async fn exists(&self, filter: &RecordFilter) -> Result<bool, AppError> {
        let count = entity::prelude::Registration::find()
            .filter(filter_condition(filter))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Sets the status of every row matching the filter.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated
    /// - `Err(AppError::InternalErr(EmptyFilter))` - The filter has no fields set
    pub async fn update_status(
        &self,
        filter: &RecordFilter,
        status: RegistrationStatus,
    ) -> Result<u64, AppError> {
        if filter.is_empty() {
            return Err(InternalError::EmptyFilter("update_status").into());
        }

        let result = entity::prelude::Registration::update_many()
            .set(entity::registration::ActiveModel {
                status: ActiveValue::Set(status),
                ..Default::default()
            })
            .filter(filter_condition(filter))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every row matching the filter.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    /// - `Err(AppError::InternalErr(EmptyFilter))` - The filter has no fields set
    pub async fn delete(&self, filter: &RecordFilter) -> Result<u64, AppError> {
        if filter.is_empty() {
            return Err(InternalError::EmptyFilter("delete").into());
        }

        let result = entity::prelude::Registration::delete_many()
            .filter(filter_condition(filter))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Returns the matching row only when the filter selects exactly one.
    async fn single(&self, filter: &RecordFilter) -> Result<Option<Record>, AppError> {
        let mut records = self.find(filter).await?;

        if records.len() != 1 {
            return Ok(None);
        }

        Ok(records.pop())
    }
}

/// Builds the conjunctive predicate for a record filter.
///
/// Only populated fields contribute a clause; an empty filter yields an empty `all()`
/// condition which matches every row.
pub(crate) fn filter_condition(filter: &RecordFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(discord_id) = filter.discord_id {
        condition = condition.add(Column::DiscordId.eq(discord_id.to_string()));
    }
    if let Some(email) = &filter.email {
        condition = condition.add(Column::Email.eq(email.as_str()));
    }
    if let Some(token) = &filter.token {
        condition = condition.add(Column::Token.eq(token.as_str()));
    }
    if let Some(submitted_at) = filter.submitted_at {
        condition = condition.add(Column::SubmittedAt.eq(submitted_at));
    }
    if let Some(role_kind) = &filter.role_kind {
        condition = condition.add(Column::RoleKind.eq(role_kind.as_str()));
    }
    if let Some(status) = filter.status {
        condition = condition.add(Column::Status.eq(status));
    }

    condition
}
