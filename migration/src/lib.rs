pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_category_table;
mod m20261001_000002_create_faq_table;
mod m20261001_000003_create_ticket_table;
mod m20261001_000004_create_wallet_transaction_table;
mod m20261001_000005_create_zone_table;
mod m20261001_000006_create_address_table;
mod m20261001_000007_create_repair_request_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_category_table::Migration),
            Box::new(m20261001_000002_create_faq_table::Migration),
            Box::new(m20261001_000003_create_ticket_table::Migration),
            Box::new(m20261001_000004_create_wallet_transaction_table::Migration),
            Box::new(m20261001_000005_create_zone_table::Migration),
            Box::new(m20261001_000006_create_address_table::Migration),
            Box::new(m20261001_000007_create_repair_request_table::Migration),
        ]
    }
}
