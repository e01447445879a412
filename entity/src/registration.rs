use sea_orm::entity::prelude::*;

/// Lifecycle state of a registration row.
///
/// Rows are inserted as `Pending` and may only move to `Registered` once the emailed
/// token has been confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum RegistrationStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "registered")]
    Registered,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "registration")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub discord_id: String,
    #[sea_orm(unique)]
    pub email: String,
    pub token: String,
    pub submitted_at: DateTimeUtc,
    pub role_kind: String,
    pub status: RegistrationStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
