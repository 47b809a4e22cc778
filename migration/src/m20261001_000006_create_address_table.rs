use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000005_create_zone_table::Zone;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Address::Table)
                    .if_not_exists()
                    .col(pk_uuid(Address::Id))
                    .col(uuid_null(Address::ZoneId))
                    .col(string(Address::Street))
                    .col(string(Address::City))
                    .col(string(Address::PostalCode))
                    .col(timestamp_with_time_zone(Address::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_address_zone_id")
                            .from(Address::Table, Address::ZoneId)
                            .to(Zone::Table, Zone::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Address::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Address {
    Table,
    Id,
    ZoneId,
    Street,
    City,
    PostalCode,
    CreatedAt,
}
