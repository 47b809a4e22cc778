use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000003_create_ticket_table::Ticket;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RepairRequest::Table)
                    .if_not_exists()
                    .col(pk_uuid(RepairRequest::Id))
                    .col(uuid_null(RepairRequest::TicketId))
                    .col(string(RepairRequest::Title))
                    .col(text(RepairRequest::Description))
                    .col(string(RepairRequest::Status))
                    .col(timestamp_with_time_zone(RepairRequest::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_repair_request_ticket_id")
                            .from(RepairRequest::Table, RepairRequest::TicketId)
                            .to(Ticket::Table, Ticket::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RepairRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RepairRequest {
    Table,
    Id,
    TicketId,
    Title,
    Description,
    Status,
    CreatedAt,
}
