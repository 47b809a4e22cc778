use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WalletTransaction::Table)
                    .if_not_exists()
                    .col(pk_uuid(WalletTransaction::Id))
                    .col(string(WalletTransaction::Reference))
                    .col(text(WalletTransaction::Description))
                    .col(big_integer(WalletTransaction::Amount))
                    .col(timestamp_with_time_zone(WalletTransaction::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WalletTransaction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WalletTransaction {
    Table,
    Id,
    Reference,
    Description,
    Amount,
    CreatedAt,
}
