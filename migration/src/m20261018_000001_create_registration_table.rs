use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Registration::Table)
                    .if_not_exists()
                    .col(pk_auto(Registration::Id))
                    .col(string_uniq(Registration::DiscordId))
                    .col(string_uniq(Registration::Email))
                    .col(string_len(Registration::Token, 64))
                    .col(timestamp_with_time_zone(Registration::SubmittedAt))
                    .col(string(Registration::RoleKind))
                    .col(string_len(Registration::Status, 16).default("pending"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Registration::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Registration {
    Table,
    Id,
    DiscordId,
    Email,
    Token,
    SubmittedAt,
    RoleKind,
    Status,
}
