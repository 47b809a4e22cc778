use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_category_table::Category;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(pk_uuid(Ticket::Id))
                    .col(uuid_null(Ticket::CategoryId))
                    .col(string(Ticket::Subject))
                    .col(text(Ticket::Body))
                    .col(string(Ticket::Status))
                    .col(integer(Ticket::Priority))
                    .col(timestamp_with_time_zone(Ticket::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_category_id")
                            .from(Ticket::Table, Ticket::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ticket {
    Table,
    Id,
    CategoryId,
    Subject,
    Body,
    Status,
    Priority,
    CreatedAt,
}
