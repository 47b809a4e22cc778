//! Wallet transaction factory for creating test transaction entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test wallet transactions with customizable fields.
pub struct WalletTransactionFactory<'a> {
    db: &'a DatabaseConnection,
    id: Uuid,
    reference: String,
    description: String,
    amount: i64,
    created_at: DateTime<Utc>,
}

impl<'a> WalletTransactionFactory<'a> {
    /// Creates a new WalletTransactionFactory with default values.
    ///
    /// Defaults:
    /// - reference: `"TX-{n}"` where n is auto-incremented
    /// - description: `"Top up"`
    /// - amount: `1000`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: Uuid::new_v4(),
            reference: format!("TX-{}", n),
            description: "Top up".to_string(),
            amount: 1000,
            created_at: Utc::now(),
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = reference.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn amount(mut self, amount: i64) -> Self {
        self.amount = amount;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the wallet transaction entity into the database.
    pub async fn build(self) -> Result<entity::wallet_transaction::Model, DbErr> {
        entity::wallet_transaction::ActiveModel {
            id: ActiveValue::Set(self.id),
            reference: ActiveValue::Set(self.reference),
            description: ActiveValue::Set(self.description),
            amount: ActiveValue::Set(self.amount),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a wallet transaction with default values.
pub async fn create_wallet_transaction(
    db: &DatabaseConnection,
) -> Result<entity::wallet_transaction::Model, DbErr> {
    WalletTransactionFactory::new(db).build().await
}
