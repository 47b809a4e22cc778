use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Zone::Table)
                    .if_not_exists()
                    .col(pk_uuid(Zone::Id))
                    .col(string(Zone::Name))
                    .col(string(Zone::Code))
                    .col(boolean(Zone::IsActive))
                    .col(timestamp_with_time_zone(Zone::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Zone::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Zone {
    Table,
    Id,
    Name,
    Code,
    IsActive,
    CreatedAt,
}
